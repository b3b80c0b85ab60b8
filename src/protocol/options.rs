use std::io::{self, Write};

/// Runtime settings for a protocol session, changed with `setoption`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolOptions {
    /// Print an `info string` line describing each `check` before its verdict.
    pub verbose: bool,
    /// Text placed between coordinates in `moves` and `coordinates` output.
    pub separator: String,
}

impl Default for ProtocolOptions {
    fn default() -> Self {
        ProtocolOptions {
            verbose: false,
            separator: " ".to_string(),
        }
    }
}

impl ProtocolOptions {
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "option name Verbose type check default {}",
            if self.verbose { "true" } else { "false" }
        )?;
        writeln!(
            out,
            "option name Separator type string default {:?}",
            self.separator
        )?;
        writeln!(out, "optionsok")
    }

    /// Apply one option. Returns false when the name is not recognized.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "verbose" => {
                if let Some(v) = value {
                    self.verbose = matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1");
                }
            }
            "separator" => {
                self.separator = match value {
                    Some("space") | None => " ".to_string(),
                    Some("comma") => ",".to_string(),
                    Some(v) => v.to_string(),
                };
            }
            _ => return false,
        }

        #[cfg(feature = "logging")]
        log::debug!("option {normalized} set to {value:?}");
        true
    }
}

/// Split `setoption name <N...> value <V...>` into its name and value.
///
/// The name runs up to the first `value` keyword; everything after it is the
/// value verbatim, so a value may itself contain `name` or `value`.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    let ["setoption", "name", rest @ ..] = parts else {
        return None;
    };

    let (name, value) = match rest.iter().position(|&p| p == "value") {
        Some(split) => (&rest[..split], Some(&rest[split + 1..])),
        None => (rest, None),
    };
    if name.is_empty() {
        return None;
    }

    let value = value.filter(|v| !v.is_empty()).map(|v| v.join(" "));
    Some((name.join(" "), value))
}
