//! Tests for input parsing and the prompt loop

#[cfg(test)]
mod tests {
    use namefractal::FractalError;
    use namefractal::io::configuration::PROMPT_TEXT;
    use namefractal::io::prompt::{PromptCommand, PromptSession, parse_input};
    use std::io::{Cursor, Write};

    fn run_session(input: &str) -> (Vec<String>, String) {
        let mut seen = Vec::new();
        let mut written = Vec::new();
        PromptSession::new(Cursor::new(input.as_bytes()), &mut written)
            .run(|name, out| {
                seen.push(name.to_string());
                writeln!(out, "handled {name}").map_err(|source| FractalError::Prompt { source })
            })
            .expect("Session failed");
        let output = String::from_utf8(written).expect("Output is not UTF-8");
        (seen, output)
    }

    // Tests names are trimmed
    // Verified by passing the raw line through
    #[test]
    fn test_parse_trims_names() {
        assert_eq!(
            parse_input("  Ada Lovelace \n"),
            PromptCommand::Generate("Ada Lovelace".into())
        );
    }

    // Tests exit matches in any case
    // Verified by comparing case-sensitively
    #[test]
    fn test_parse_exit_any_case() {
        assert_eq!(parse_input("exit"), PromptCommand::Exit);
        assert_eq!(parse_input("  EXIT\n"), PromptCommand::Exit);
        assert_eq!(parse_input("Exit"), PromptCommand::Exit);
        assert_eq!(parse_input("exits"), PromptCommand::Generate("exits".into()));
    }

    // Tests blank input asks again
    // Verified by treating blank input as a name
    #[test]
    fn test_parse_blank_retries() {
        assert_eq!(parse_input(""), PromptCommand::Retry);
        assert_eq!(parse_input("   \t\n"), PromptCommand::Retry);
    }

    // Tests names without letters are still generated
    // Verified by retrying on digit-only names
    #[test]
    fn test_parse_keeps_letterless_names() {
        assert_eq!(parse_input("123"), PromptCommand::Generate("123".into()));
    }

    // Tests the loop handles names and blank lines until exit
    // Verified by continuing after exit
    #[test]
    fn test_session_runs_until_exit() {
        let (seen, output) = run_session("Ada\n\nGrace\nexit\nIgnored\n");

        assert_eq!(seen, vec!["Ada", "Grace"]);
        assert_eq!(output.matches(PROMPT_TEXT).count(), 4);
        assert!(output.contains("Please enter a valid name."));
        assert!(output.contains("handled Grace"));
        assert!(output.ends_with("Exiting program.\n"));
    }

    // Tests end of input ends the session
    // Verified by looping on an empty read
    #[test]
    fn test_session_exits_at_end_of_input() {
        let (seen, output) = run_session("Ada\n");

        assert_eq!(seen, vec!["Ada"]);
        assert!(output.ends_with("Exiting program.\n"));
    }

    // Tests handler errors stop the loop
    // Verified by logging handler errors and continuing
    #[test]
    fn test_session_propagates_handler_errors() {
        let mut calls = 0;
        let mut session = PromptSession::new(Cursor::new("Ada\nGrace\n".as_bytes()), Vec::new());
        let result = session.run(|_, _| {
            calls += 1;
            Err(FractalError::InvalidSequence {
                reason: "boom".into(),
            })
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
