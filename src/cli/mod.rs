//! CLI 支持模块
//!
//! 交互式命令行的补全与结果打印

mod completer;
mod printer;

pub use completer::CommandCompleter;
pub use printer::Printer;
