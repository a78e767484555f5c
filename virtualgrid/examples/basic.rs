// Example: lay out columns and find the ones inside a horizontal viewport.
use virtualgrid::{columns, total_width, visible_extent_range};

fn main() -> Result<(), virtualgrid::Error> {
    let widths: Vec<u32> = (0..10_000).map(|i| 60 + (i % 7) * 20).collect();
    let cols = columns(&widths);
    println!("columns={} total_width={}", cols.len(), total_width(&cols));

    let Some(visible) = visible_extent_range(&cols, 250_000, 1_280)? else {
        println!("nothing visible");
        return Ok(());
    };
    let visible = visible.with_overscan(2, cols.len());
    println!("visible_range={visible:?}");
    for col in &cols[visible.as_slice_range()] {
        println!("  column {} at x={} width={}", col.column, col.x, col.width);
    }
    Ok(())
}
