mod controller;
mod e2e;
mod util;
