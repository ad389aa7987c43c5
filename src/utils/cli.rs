//! Command-line argument parsing and help for arbor.
//!
//! When invoked with no arguments, arbor launches the TUI in the current directory.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    Exit,
}

/// Parses the process arguments, running any one-shot flag before returning.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    handle(&args)
}

pub fn handle(args: &[String]) -> CliAction {
    let Some(arg) = args.first() else {
        return CliAction::RunApp;
    };

    if args.len() > 1 {
        eprintln!("Error: arbor accepts only one argument at a time.");
        eprintln!("Usage: arbor [OPTION]");
        return CliAction::Exit;
    }

    match arg.as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--keys" => {
            print_keybinds();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("arbor {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"arbor - A terminal file browser with a lazy directory tree and previews

USAGE:
  arbor [OPTION]

Browses the current directory (or every drive, on drive-letter systems).

OPTIONS:
      --init              Generate the default configuration
      --keybinds          Display all the default keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of arbor

ENVIRONMENT:
  ARBOR_CONFIG            Override the default config path
  ARBOR_LOG               Override the log file path
  RUST_LOG                Log filter (default: info)
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  go_up                     ["k", "up"]
  go_down                   ["j", "down"]
  go_to_top                 ["g", "home"]
  go_to_bottom              ["G", "end"]
  expand                    ["l", "right"]
  collapse                  ["h", "left"]      (jumps to the parent if already folded)
  select                    ["enter"]          (preview; folds/unfolds directories)
  scroll_preview_up         ["<c-u>", "pageup"]
  scroll_preview_down       ["<c-d>", "pagedown"]
  quit                      ["q"]

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "space", "back", "enter", "esc", "tab", "home", "end", "pageup", "pagedown"
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}
