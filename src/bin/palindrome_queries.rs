//! Reads a palindrome-query problem from stdin and prints one `YES`/`NO` per query.
//!
//! Input:
//!
//! ```text
//! n m
//! <string of n characters>
//! <m lines of "1 k c" or "2 a b">
//! ```

use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use palindex::{Error, Operation, PalindromeOracle, Result, Verdict};

fn parse_header(line: Option<&str>) -> Result<(usize, usize)> {
    let line = line.ok_or_else(|| Error::Parse("missing header line".into()))?;
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(n)), Some(Ok(m)), None) => Ok((n, m)),
        _ => Err(Error::Parse(format!("expected \"n m\", got {line:?}"))),
    }
}

fn solve(input: &str) -> Result<Vec<Verdict>> {
    let mut lines = input.lines();
    let (n, m) = parse_header(lines.next())?;
    let s = lines
        .next()
        .ok_or_else(|| Error::Parse("missing string line".into()))?;

    let mut oracle = PalindromeOracle::new(n, s)?;
    let mut verdicts = Vec::new();
    for _ in 0..m {
        let line = lines
            .next()
            .ok_or_else(|| Error::Parse(format!("expected {m} operations")))?;
        let op: Operation = line.parse()?;
        if let Some(verdict) = oracle.apply(&op)? {
            verdicts.push(verdict);
        }
    }
    Ok(verdicts)
}

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    let verdicts = match solve(&input) {
        Ok(verdicts) => verdicts,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let written = verdicts
        .iter()
        .try_for_each(|v| writeln!(out, "{v}"))
        .and_then(|_| out.flush());
    if let Err(e) = written {
        eprintln!("failed to write stdout: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_sample() {
        let input = "7 5\naybabtu\n2 3 5\n1 3 x\n2 3 5\n1 5 x\n2 3 5\n";
        assert_eq!(
            solve(input).unwrap(),
            vec![Verdict::Yes, Verdict::No, Verdict::Yes]
        );
    }

    #[test]
    fn test_solve_keeps_spaces_in_string() {
        let input = "3 2\n a \n2 1 3\n1 3 b\r\n2 1 3\n";
        assert_eq!(solve(input).unwrap(), vec![Verdict::Yes, Verdict::No]);
        assert_eq!(solve("2 1\r\nab\r\n2 1 2\r\n").unwrap(), vec![Verdict::No]);
    }

    #[test]
    fn test_solve_rejects_bad_header() {
        assert!(matches!(solve("7\nabc\n"), Err(Error::Parse(_))));
        assert!(matches!(solve(""), Err(Error::Parse(_))));
        assert!(matches!(solve("4 0\nabc\n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_solve_missing_operations() {
        assert!(matches!(solve("3 2\naba\n2 1 3\n"), Err(Error::Parse(_))));
    }
}
