extern crate csv;
extern crate itertools;
extern crate tempfile;
extern crate toml;
extern crate ureq;
#[macro_use]
extern crate serde_derive;

pub mod configuration;
pub mod dc;
pub mod defs;
pub mod europarl2019;
pub mod output;
pub mod render;
