//! # Commands Module / 命令模块
//!
//! One submodule per subcommand: `ci` (build+test driver), `suite`
//! (script-suite executor) and `compare` (golden-output comparator).

use std::process::ExitCode;

pub mod ci;
pub mod compare;
pub mod suite;

/// Forwards an external tool's exit code as this process's own.
/// Codes outside `u8` range are clamped; 0 stays success.
pub(crate) fn forward(code: i32) -> ExitCode {
    ExitCode::from(code.clamp(0, 255) as u8)
}
