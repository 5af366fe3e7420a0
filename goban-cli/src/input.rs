use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use goban::{Goban, Point};

/// Read a board from `path`, or from stdin when `path` is `-`.
pub fn load_goban(path: &Path) -> Result<Goban> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read board from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?
    };

    let goban: Goban = text.parse().context("invalid board")?;
    tracing::debug!(cols = goban.cols(), rows = goban.rows(), "board loaded:\n{goban}");
    Ok(goban)
}

/// Parse an `X,Y` query point.
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got {s:?}");
    };
    let x = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("1,2").unwrap(), (1, 2));
        assert_eq!(parse_point(" 3 , -1 ").unwrap(), (3, -1));
    }

    #[test]
    fn rejects_bad_points() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,").is_err());
    }

    #[test]
    fn loads_board_file() {
        let path = std::env::temp_dir().join(format!("goban-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "#o.\n..#\n").unwrap();
        let goban = load_goban(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(goban.cols(), 3);
        assert_eq!(goban.rows(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_goban(Path::new("/nonexistent/goban.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read board file"));
    }
}
