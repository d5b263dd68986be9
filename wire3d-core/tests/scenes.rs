use wire3d_core::{
    Animation, Camera, EdgeRole, FrameBuffer, Phase, Preset, ScreenPoint, Shape, ShapeKind,
    Spin, StopReason, Theme, Viewport,
};

#[test]
fn test_sphere_two_by_four() {
    let sphere = Shape::sphere(1.0, 2, 4).unwrap();
    assert_eq!(sphere.points().len(), 12);
    let parallels = sphere
        .edges()
        .iter()
        .filter(|e| e.role == EdgeRole::Parallel)
        .count();
    let meridians = sphere
        .edges()
        .iter()
        .filter(|e| e.role == EdgeRole::Meridian)
        .count();
    assert_eq!(parallels, 12);
    assert_eq!(meridians, 8);
    assert_eq!(sphere.edges().len(), 20);
}

#[test]
fn test_coin_eight_steps() {
    let coin = Shape::coin(1.5, 0.2, 8).unwrap();
    assert_eq!(coin.points().len(), 16);
    assert_eq!(coin.edges().len(), 24);
}

#[test]
fn test_horizontal_line_in_ten_by_ten() {
    let mut fb = FrameBuffer::new(Viewport::new(10, 10).unwrap());
    let plotted = wire3d_core::draw_line(
        &mut fb,
        ScreenPoint::new(2, 5),
        ScreenPoint::new(6, 5),
        wire3d_core::Cell::plain('#'),
    );
    assert_eq!(plotted, 5);
    let rows: Vec<String> = fb.to_plain_text().lines().map(str::to_string).collect();
    assert_eq!(rows[5], "  #####   ");
    assert!(rows.iter().enumerate().all(|(y, row)| y == 5 || row.trim().is_empty()));
}

#[test]
fn test_every_theme_renders_every_shape() {
    for shape in ShapeKind::ALL {
        for theme in Theme::ALL {
            let preset = Preset::resolve(shape, theme);
            let mut animation = Animation::from_preset(&preset, theme)
                .unwrap()
                .with_frame_limit(Some(5));
            let mut fb = animation.frame_buffer();
            while animation.is_running() {
                animation.step(&mut fb);
            }
            assert!(fb.painted() > 0, "{theme} {shape} drew nothing");
            assert_eq!(animation.phase(), Phase::Terminated(StopReason::FrameLimit));
        }
    }
}

#[test]
fn test_classic_coin_first_frame() {
    let preset = Preset::resolve(ShapeKind::Coin, Theme::Classic);
    let mut animation = Animation::from_preset(&preset, Theme::Classic).unwrap();
    let mut fb = animation.frame_buffer();
    animation.render(&mut fb);

    // Facing the camera, both rings sit on the horizontal axis through the
    // centre: the front ring at radius 1.5 * 40 / 4.2, the back ring at 1.5 * 40 / 3.8.
    let front_right = ScreenPoint::new(40 + 14, 20);
    let back_right = ScreenPoint::new(40 + 15, 20);
    assert_eq!(animation.projected()[0], front_right);
    assert_eq!(animation.projected()[24], back_right);
    // The rim between them is drawn first, then the closing ring segments
    // (i = 23) end on the same cells and win.
    assert_eq!(fb.get(front_right).map(|c| c.glyph), Some('.'));
    assert_eq!(fb.get(back_right).map(|c| c.glyph), Some('.'));
    // Elsewhere the rims stay visible.
    let rims = fb.to_plain_text().chars().filter(|&c| c == '#').count();
    assert!(rims > 0);
}

#[test]
fn test_angle_sequence_is_reproducible() {
    let run = || {
        let mut animation = Animation::new(
            Shape::cube(1.0).unwrap(),
            Camera::new(40.0, 4.0).unwrap(),
            Viewport::new(80, 40).unwrap(),
            Spin::new(2.0, 3.0, Some(1.0)),
            Theme::Classic.skin(ShapeKind::Cube),
        );
        let mut fb = animation.frame_buffer();
        (0..30)
            .map(|_| {
                animation.step(&mut fb);
                (animation.rotation(), fb.to_plain_text())
            })
            .collect::<Vec<_>>()
    };
    let first = run();
    assert_eq!(first, run());
    let last = first.last().unwrap().0;
    assert!((last.x - 60.0).abs() < 1e-9);
    assert!((last.y - 90.0).abs() < 1e-9);
    assert!((last.z - 30.0).abs() < 1e-9);
}
