// Example: flatten a collapsible group forest and window it.
use virtualgrid::{Group, Row, RowHeights, rows, set_collapsed, total_height, visible_extent_range};

fn main() -> Result<(), virtualgrid::Error> {
    let mut groups = vec![
        Group::ancestor(vec![Group::leaf(3), Group::leaf(500)]),
        Group::ancestor(vec![Group::ancestor(vec![Group::leaf(2)])]),
        Group::leaf(0),
    ];
    let heights = RowHeights::new(56, 40, 72);

    let all = rows(&groups, heights, &[], 0);
    println!("rows={} total_height={}", all.len(), total_height(&all));

    // Collapse the big leaf; everything below it moves up.
    set_collapsed(&mut groups, &[0, 1], true);
    let all = rows(&groups, heights, &[], 0);
    println!("after collapse: rows={} total_height={}", all.len(), total_height(&all));

    if let Some(visible) = visible_extent_range(&all, 100, 300)? {
        for row in &all[visible.as_slice_range()] {
            match row {
                Row::Group {
                    y, path, collapsed, ..
                } => println!("  y={y:>4} group {path:?} collapsed={collapsed}"),
                Row::Leaf { y, path, row, .. } => println!("  y={y:>4} row {row} of {path:?}"),
                Row::Spacer { y, height } => println!("  y={y:>4} spacer ({height})"),
            }
        }
    }
    Ok(())
}
