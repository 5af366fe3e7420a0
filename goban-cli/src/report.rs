use anyhow::Result;
use goban::{Goban, Point, Status};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub cols: usize,
    pub rows: usize,
    pub queries: Vec<Query>,
}

#[derive(Debug, Serialize)]
pub struct Query {
    pub x: i32,
    pub y: i32,
    pub status: Status,
    pub captured: bool,
    pub group_size: usize,
    pub liberties: Vec<Point>,
}

/// Answer every point in `points`, or every stone on the board when
/// `points` is empty.
pub fn build_report(goban: &Goban, points: &[Point]) -> Result<Report> {
    let points: Vec<Point> = if points.is_empty() {
        let mut stones = Vec::new();
        for (x, y) in goban.points() {
            if goban.status(x, y)?.is_stone() {
                stones.push((x, y));
            }
        }
        stones
    } else {
        points.to_vec()
    };

    let mut queries = Vec::with_capacity(points.len());
    for (x, y) in points {
        let mut liberties = goban.liberties(x, y)?;
        liberties.sort_unstable_by_key(|&(x, y)| (y, x));
        queries.push(Query {
            x,
            y,
            status: goban.status(x, y)?,
            captured: goban.is_captured(x, y)?,
            group_size: goban.group(x, y)?.len(),
            liberties,
        });
    }

    Ok(Report {
        cols: goban.cols(),
        rows: goban.rows(),
        queries,
    })
}
