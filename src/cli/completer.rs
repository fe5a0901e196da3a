//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
const COMMANDS: &[&str] = &[
    "help",
    "quit",
    "exit",
    "stats",
    "vertices",
    "edges",
    "neighbors",
    "degree",
    "add-vertex",
    "remove-vertex",
    "add-edge",
    "remove-edge",
    "cost",
    "duration",
    "random",
    "load",
    "save",
    "activities",
    "path",
    "walk",
    "toposort",
    "schedule",
    "tsp",
];

/// GraphKit CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 只补全第一个单词（命令名），参数是数字或文件名
        if line_to_cursor.contains(' ') {
            return Ok((pos, vec![]));
        }

        let completions: Vec<Pair> = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line_to_cursor))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
