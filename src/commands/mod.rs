pub type CmdResult<T> = quickstruct::Result<(T, i32)>;

pub mod preview;
pub mod section;
pub mod strategies;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
}

pub(crate) fn run_raw(command: crate::Commands) -> quickstruct::Result<(String, i32)> {
    match command {
        crate::Commands::Preview(args) => preview::run_raw(args),
        _ => Err(quickstruct::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support raw output",
            None,
            None,
        )),
    }
}

pub(crate) fn run_json(command: crate::Commands) -> (quickstruct::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Section(args) => dispatch!(args, section),
        crate::Commands::Strategies(args) => dispatch!(args, strategies),

        // Special case: Preview uses raw output mode
        crate::Commands::Preview(_) => {
            let err = quickstruct::Error::validation_invalid_argument(
                "output_mode",
                "Preview command uses raw output mode",
                None,
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
