//! Regenerate `src/scripts.rs` from the `--help` output of the checks
//!
//! Run from the workspace root after `cargo build`:
//! `cargo run -p make-docs > src/scripts.rs`

use std::process::{self, Command};

struct Check {
    name: &'static str,
    about: &'static str,
}

const SMART_AND_NET: &str = "Works with smart-snmpd and net-snmpd.";
const SMART_ONLY: &str = "Needs smart-snmpd.";

static CHECKS: &[Check] = &[
    Check {
        name: "check-cpu-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-load-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-mem-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-swap-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-fs-by-snmp",
        about: "Works with smart-snmpd and net-snmpd (HOST-RESOURCES-MIB storage table).",
    },
    Check {
        name: "check-proc-cnt-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-user-cnt-by-snmp",
        about: SMART_AND_NET,
    },
    Check {
        name: "check-procs-by-snmp",
        about: SMART_ONLY,
    },
    Check {
        name: "check-snmp-agent-avail",
        about: SMART_ONLY,
    },
    Check {
        name: "check-snmp-daemon-avail",
        about: SMART_AND_NET,
    },
];

fn help_text(name: &str) -> Result<String, String> {
    let output = Command::new(format!("target/debug/{}", name))
        .arg("--help")
        .output()
        .map_err(|e| format!("Couldn't execute {}: {}", name, e))?;
    String::from_utf8(output.stdout).map_err(|e| format!("Help of {} is not utf8: {}", name, e))
}

/// Turn every line into an inner doc comment line
fn doc_lines<S: AsRef<str>, I: Iterator<Item = S>>(lines: I) -> String {
    lines
        .map(|line| format!("//! {}", line.as_ref()).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    let mut out = doc_lines("Documentation about the checks contained herein\n".split('\n'));
    out.push('\n');
    out.push_str(&doc_lines(CHECKS.iter().map(|c| format!("- [{0}](#{0})", c.name))));
    out.push('\n');
    for check in CHECKS {
        let help = match help_text(check.name) {
            Ok(help) => help,
            Err(msg) => {
                eprintln!("{}", msg);
                process::exit(1);
            }
        };
        out.push_str(&format!(
            "//!\n//! # {0}\n//!\n//! {1}\n//!\n//! ```plain\n//! $ {0} --help\n",
            check.name, check.about
        ));
        out.push_str(&doc_lines(help.lines()));
        out.push_str("\n//! ```\n");
    }
    print!("{}", out);
}
