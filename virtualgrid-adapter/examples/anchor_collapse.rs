use virtualgrid::{Group, RowHeights};
use virtualgrid_adapter::{GridController, GridOptions, Rect};

fn main() {
    // Example: collapse a group above the viewport without the visible content jumping.
    //
    // `set_collapsed` / `toggle_collapsed` run the usual adapter flow internally:
    // 1) capture an anchor (row id + offset_in_viewport) before the forest changes
    // 2) re-flatten the forest
    // 3) apply the anchor so the same row stays in the same place
    let options = GridOptions::new(RowHeights::new(20, 10, 0), vec![80, 120])
        .with_initial_rect(Some(Rect {
            main: 50,
            cross: 200,
        }));
    let mut c = GridController::new(options).with_groups(vec![Group::leaf(10), Group::leaf(10)]);
    c.on_scroll(145, 0);

    let anchor = c.capture_first_visible_anchor();
    println!("before collapse: off={} anchor={anchor:?}", c.scroll_top());

    let ok = c.toggle_collapsed(&[0]);
    println!("after collapse: ok={ok} off={}", c.scroll_top());

    // The anchored row itself disappears here; the viewport snaps to its group header.
    c.on_scroll(65, 0);
    let ok = c.toggle_collapsed(&[1]);
    println!("collapse anchored group: ok={ok} off={}", c.scroll_top());
}
