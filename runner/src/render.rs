use common::{Cell, SnakeSnapshot};

const EMPTY: char = '.';
const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';

/// Plain text board, one row per line, followed by the status line.
/// Cells outside the board are skipped.
pub fn render_board(snapshot: &SnakeSnapshot) -> String {
    let size = snapshot.board_size;
    let mut grid = vec![vec![EMPTY; size]; size];
    let mut paint = |cell: Cell, mark: char| {
        if snapshot.contains(cell) {
            grid[cell.y][cell.x] = mark;
        }
    };

    paint(snapshot.food, FOOD);
    for segment in snapshot.snake.iter().skip(1) {
        paint(*segment, BODY);
    }
    if let Some(head) = snapshot.head() {
        paint(head, HEAD);
    }

    let mut out = String::with_capacity(size * (size + 1) + 64);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

pub fn status_line(snapshot: &SnakeSnapshot) -> String {
    format!(
        "[{}] tick {} | length {} | {}",
        snapshot.phase,
        snapshot.tick,
        snapshot.length(),
        snapshot.status_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Direction, Phase};

    fn snapshot() -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: 4,
            snake: vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(0, 2)],
            food: Cell::new(3, 0),
            phase: Phase::Running,
            direction: Direction::Up,
            score: 30,
            tick: 7,
            end_reason: None,
        }
    }

    #[test]
    fn test_board_layout() {
        let rendered = render_board(&snapshot());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "...*");
        assert_eq!(lines[1], ".@..");
        assert_eq!(lines[2], "oo..");
        assert_eq!(lines[3], "....");
        assert_eq!(lines[4], "[running] tick 7 | length 3 | Score: 30");
    }

    #[test]
    fn test_food_under_snake_is_hidden_by_body() {
        let mut snap = snapshot();
        snap.food = Cell::new(0, 2);
        let rendered = render_board(&snap);
        assert!(!rendered.contains(FOOD));
    }

    #[test]
    fn test_malformed_snapshot_renders_without_panicking() {
        let mut snap = snapshot();
        snap.snake = vec![Cell::new(9, 9)];
        snap.food = Cell::new(4, 0);
        let rendered = render_board(&snap);
        assert_eq!(rendered.lines().take(4).collect::<Vec<_>>(), vec!["...."; 4]);

        snap.snake.clear();
        let rendered = render_board(&snap);
        assert!(rendered.ends_with("length 0 | Score: 30\n"));
    }
}
