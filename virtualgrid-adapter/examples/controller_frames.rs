use virtualgrid::{Group, Row, RowHeights};
use virtualgrid_adapter::{GridController, GridOptions, Rect};

fn main() -> Result<(), virtualgrid_adapter::Error> {
    // Example: drive a grouped grid the way a UI adapter would, one frame per scroll event.
    let options = GridOptions::new(RowHeights::new(32, 24, 48), vec![120; 20])
        .with_overscan(2)
        .with_initial_rect(Some(Rect {
            main: 200,
            cross: 480,
        }));
    let groups = vec![
        Group::ancestor(vec![Group::leaf(40), Group::leaf(15)]),
        Group::leaf(200),
    ];
    let mut c = GridController::new(options).with_groups(groups);
    println!(
        "rows={} total={}x{}",
        c.rows().len(),
        c.total_width(),
        c.total_height()
    );

    for (top, left) in [(0, 0), (60, 0), (1500, 300), (1510, 330)] {
        c.set_scroll_clamped(top, left);
        let frame = c.frame()?;
        println!(
            "top={} left={} rows={:?} cols={:?}",
            c.scroll_top(),
            c.scroll_left(),
            frame.row_range,
            frame.column_range
        );
        for keyed in &frame.rows {
            let label = match &keyed.value {
                Row::Group { path, .. } => format!("group {path:?}"),
                Row::Leaf { path, row, .. } => format!("row {row} of {path:?}"),
                Row::Spacer { .. } => "spacer".to_string(),
            };
            println!("  key={:>2} y={:>5} {label}", keyed.key, keyed.value.y());
        }
    }
    Ok(())
}
