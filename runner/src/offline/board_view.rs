use snake_common::games::snake::{Point, SnakeSnapshot};

pub fn render_board(snapshot: &SnakeSnapshot) -> String {
    let width = snapshot.field_size.width;
    let height = snapshot.field_size.height;
    let mut rows = vec![vec!['.'; width]; height];

    if let Some(Point { x, y }) = snapshot.food {
        rows[y][x] = '*';
    }
    for (index, point) in snapshot.body.iter().enumerate() {
        rows[point.y][point.x] = if index == 0 { '@' } else { 'o' };
    }

    let border = format!("+{}+", "-".repeat(width));
    let mut out = String::with_capacity((width + 3) * (height + 3));
    out.push_str(&format!(
        "tick {}  score {}  high {}  {:?}\n",
        snapshot.tick, snapshot.score, snapshot.high_score, snapshot.status
    ));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}
