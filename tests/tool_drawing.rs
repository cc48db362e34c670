use easel::canvas::Canvas;
use easel::input::{InputEvent, InputLocation};
use easel::tools::ToolKind;
use easel::workspace::Workspace;
use egui::Pos2;
use image::Rgba;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn workspace_with_canvas(tool: ToolKind) -> Workspace {
    let mut ws = Workspace::new();
    ws.add_canvas(Canvas::new(32, 32, WHITE, "sheet"));
    ws.select_tool(tool);
    ws
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        is_in_canvas: true,
    }
}

fn outside(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        is_in_canvas: false,
    }
}

fn down(location: InputLocation) -> InputEvent {
    InputEvent::PointerDown { location }
}

fn mv(location: InputLocation) -> InputEvent {
    InputEvent::PointerMove { location }
}

fn up(location: InputLocation) -> InputEvent {
    InputEvent::PointerUp { location }
}

#[test]
fn line_tool_commits_on_release_only() {
    let mut ws = workspace_with_canvas(ToolKind::StraightLine);

    ws.route_event(&down(at(2.0, 2.0)));
    ws.route_event(&mv(at(20.0, 2.0)));

    {
        let c = ws.current_canvas().unwrap();
        assert!(c.is_stroke_active());
        // preview only: the primary buffer is untouched while dragging
        assert_eq!(*c.image().get_pixel(10, 2), WHITE);
    }

    ws.route_event(&up(at(20.0, 2.0)));

    let c = ws.current_canvas().unwrap();
    assert!(!c.is_stroke_active());
    assert_eq!(*c.image().get_pixel(2, 2), BLACK);
    assert_eq!(*c.image().get_pixel(10, 2), BLACK);
    assert_eq!(*c.image().get_pixel(20, 2), BLACK);
}

#[test]
fn line_preview_is_visible_in_the_presented_frame() {
    let mut ws = workspace_with_canvas(ToolKind::StraightLine);

    ws.route_event(&down(at(0.0, 0.0)));
    ws.route_event(&mv(at(10.0, 10.0)));

    let frame = ws.current_canvas_mut().unwrap().present();
    assert_eq!(*frame.get_pixel(5, 5), BLACK);
}

#[test]
fn abandoned_preview_never_reaches_the_committed_line() {
    let mut ws = workspace_with_canvas(ToolKind::StraightLine);

    ws.route_event(&down(at(0.0, 16.0)));
    ws.route_event(&mv(at(31.0, 0.0)));
    // frame presented between moves resyncs the preview buffer
    let _ = ws.current_canvas_mut().unwrap().present();
    ws.route_event(&mv(at(31.0, 16.0)));
    ws.route_event(&up(at(31.0, 16.0)));

    let c = ws.current_canvas().unwrap();
    // final horizontal line is committed
    assert_eq!(*c.image().get_pixel(0, 16), BLACK);
    assert_eq!(*c.image().get_pixel(31, 16), BLACK);
    // the first preview's endpoint is not
    assert_eq!(*c.image().get_pixel(31, 0), WHITE);
}

#[test]
fn rect_tool_commits_an_outline() {
    let mut ws = workspace_with_canvas(ToolKind::Rect);

    ws.route_event(&down(at(4.0, 4.0)));
    ws.route_event(&mv(at(12.0, 10.0)));
    ws.route_event(&up(at(12.0, 10.0)));

    let c = ws.current_canvas().unwrap();
    assert_eq!(*c.image().get_pixel(4, 4), BLACK);
    assert_eq!(*c.image().get_pixel(12, 10), BLACK);
    assert_eq!(*c.image().get_pixel(8, 4), BLACK);
    assert_eq!(*c.image().get_pixel(4, 7), BLACK);
    // interior stays empty
    assert_eq!(*c.image().get_pixel(8, 7), WHITE);
}

#[test]
fn ellipse_tool_commits_extrema() {
    let mut ws = workspace_with_canvas(ToolKind::Ellipse);

    ws.route_event(&down(at(5.0, 5.0)));
    ws.route_event(&up(at(25.0, 21.0)));

    let c = ws.current_canvas().unwrap();
    // center (15, 13), rx = 10, ry = 8
    assert_eq!(*c.image().get_pixel(5, 13), BLACK);
    assert_eq!(*c.image().get_pixel(25, 13), BLACK);
    assert_eq!(*c.image().get_pixel(15, 5), BLACK);
    assert_eq!(*c.image().get_pixel(15, 21), BLACK);
    assert_eq!(*c.image().get_pixel(15, 13), WHITE);
}

#[test]
fn freehand_commits_segments_as_it_moves() {
    let mut ws = workspace_with_canvas(ToolKind::Freehand);

    ws.route_event(&down(at(1.0, 1.0)));
    ws.route_event(&mv(at(9.0, 9.0)));

    // committed immediately, no double buffering involved
    let c = ws.current_canvas().unwrap();
    assert!(!c.is_stroke_active());
    assert_eq!(*c.image().get_pixel(1, 1), BLACK);
    assert_eq!(*c.image().get_pixel(5, 5), BLACK);
    assert_eq!(*c.image().get_pixel(9, 9), BLACK);

    ws.route_event(&up(at(9.0, 9.0)));

    // a fresh press starts a new polyline rather than joining the old one
    ws.route_event(&down(at(20.0, 20.0)));
    ws.route_event(&mv(at(22.0, 20.0)));
    let c = ws.current_canvas().unwrap();
    assert_eq!(*c.image().get_pixel(15, 15), WHITE);
}

#[test]
fn press_outside_the_canvas_starts_nothing() {
    let mut ws = workspace_with_canvas(ToolKind::Rect);

    ws.route_event(&down(outside(-5.0, -5.0)));
    {
        let c = ws.current_canvas().unwrap();
        assert!(!c.is_stroke_active());
        assert!(c.is_saved());
    }

    // moves and releases without an anchor are ignored too
    ws.route_event(&mv(at(10.0, 10.0)));
    ws.route_event(&up(at(10.0, 10.0)));
    let c = ws.current_canvas().unwrap();
    assert!(c.is_saved());
    assert_eq!(*c.image().get_pixel(10, 10), WHITE);
}

#[test]
fn moves_past_the_edge_clip_instead_of_panicking() {
    let mut ws = workspace_with_canvas(ToolKind::Freehand);

    ws.route_event(&down(at(30.0, 30.0)));
    ws.route_event(&mv(at(100.0, 100.0)));
    ws.route_event(&up(at(100.0, 100.0)));

    let c = ws.current_canvas().unwrap();
    assert_eq!(*c.image().get_pixel(30, 30), BLACK);
    assert_eq!(*c.image().get_pixel(31, 31), BLACK);
}
