mod login;
mod logout;
mod register;

use super::*;
