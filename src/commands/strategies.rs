use clap::Args;
use serde::Serialize;

use quickstruct::strategy::{ChoiceOption, ScriptStrategy, StylesheetStrategy};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct StrategiesArgs {}

#[derive(Debug, Serialize)]
pub struct StrategiesOutput {
    pub stylesheet: Vec<ChoiceOption>,
    pub script: Vec<ChoiceOption>,
}

pub fn run_json(_args: StrategiesArgs) -> CmdResult<StrategiesOutput> {
    Ok((
        StrategiesOutput {
            stylesheet: StylesheetStrategy::options(),
            script: ScriptStrategy::options(),
        },
        0,
    ))
}
