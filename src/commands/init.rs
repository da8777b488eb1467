//! Interactive configuration setup.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
