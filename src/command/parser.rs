//! Token-sequence parser for spatial search commands

use super::args::RectArgs;
use super::errors::{CommandError, CommandResult};

/// Parses a token sequence into a [`RectArgs`] descriptor.
///
/// Token 0 selects the command variant, case-insensitively; only `rect` is
/// active. The variant requires at least three tokens (kind, index name,
/// bounds). Remaining tokens are consumed two at a time per recognized
/// option keyword. A recognized keyword with no following argument is an
/// arity error; an unrecognized keyword is a syntax error, whether or not
/// an argument follows it.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> CommandResult<RectArgs> {
    let kind = tokens.first().ok_or(CommandError::WrongArity)?;
    if !kind.as_ref().eq_ignore_ascii_case("rect") {
        // `within` lands here too: the containment variant is reserved and
        // structurally disabled.
        return Err(CommandError::Syntax);
    }
    if tokens.len() < 3 {
        return Err(CommandError::WrongArity);
    }

    let mut args = RectArgs::new(tokens[1].as_ref(), tokens[2].as_ref());

    let mut rest = &tokens[3..];
    while let Some(keyword) = rest.first() {
        let keyword = keyword.as_ref().to_ascii_lowercase();
        rest = &rest[1..];
        match keyword.as_str() {
            "match" => {
                let pattern = rest.first().ok_or(CommandError::WrongArity)?;
                args.pattern = pattern.as_ref().to_string();
                args.match_on = true;
            }
            "limit" => {
                let value = rest.first().ok_or(CommandError::WrongArity)?;
                args.limit = value.as_ref().parse::<u64>()?;
                args.limit_on = true;
            }
            "skip" => {
                let value = rest.first().ok_or(CommandError::WrongArity)?;
                args.skip = value.as_ref().parse::<u64>()?;
                args.skip_on = true;
            }
            _ => return Err(CommandError::Syntax),
        }
        rest = &rest[1..];
    }

    Ok(args)
}
