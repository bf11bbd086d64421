use gravsim::{
    clip, grid_spacing_for_zoom, Bounds, Camera, NVec2, SimError, ViewportMapper,
    DEFAULT_ZOOM_FACTOR, MAX_ZOOM, MIN_GRID_PIXELS, MIN_ZOOM,
};

/// 800 x 600 viewport looking at the origin
pub fn mapper(zoom: f64) -> ViewportMapper {
    let camera = Camera::new(NVec2::zeros(), zoom).unwrap();
    let bounds = Bounds::from_size(800.0, 600.0).unwrap();
    ViewportMapper::new(camera, bounds)
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn camera_zoom_in_then_out_restores_zoom() {
    let mut camera = Camera::new(NVec2::zeros(), 5.0).unwrap();
    camera.zoom_in().unwrap();
    assert!(close(camera.zoom(), 5.0 * DEFAULT_ZOOM_FACTOR, 1e-15));
    camera.zoom_out().unwrap();
    assert!(close(camera.zoom(), 5.0, 1e-12));

    camera.zoom_in_by(1.25).unwrap();
    camera.zoom_out_by(1.25).unwrap();
    assert!(close(camera.zoom(), 5.0, 1e-12));
}

#[test]
fn camera_rejects_bad_zoom() {
    assert_eq!(Camera::new(NVec2::zeros(), 0.0), Err(SimError::InvalidZoom(0.0)));

    let mut camera = Camera::default();
    assert_eq!(camera.set_zoom(-2.0), Err(SimError::InvalidZoom(-2.0)));
    assert!(camera.set_zoom(f64::NAN).is_err());
    assert!(camera.set_zoom(f64::INFINITY).is_err());
    assert_eq!(camera.zoom(), 5.0);

    assert_eq!(camera.zoom_in_by(0.0), Err(SimError::InvalidZoomFactor(0.0)));
    assert!(camera.zoom_out_by(-1.0).is_err());
    assert_eq!(camera.zoom(), 5.0);

    camera.set_zoom(0.5).unwrap();
    assert_eq!(camera.zoom(), 0.5);
}

#[test]
fn repeated_zoom_stays_in_range() {
    let mut view = mapper(5.0);

    let mut refused = 0;
    for _ in 0..4000 {
        if view.camera_mut().zoom_out().is_err() {
            refused += 1;
        }
    }
    let zoom = view.camera().zoom();
    assert!(refused > 0, "zooming out never hit the floor");
    assert!(zoom >= MIN_ZOOM && zoom.is_finite(), "zoom drifted to {}", zoom);
    assert!(view.to_sim_x(0.0).is_finite());
    assert!(view.update_grid_spacing().is_finite());

    let mut refused = 0;
    for _ in 0..8000 {
        if view.camera_mut().zoom_in().is_err() {
            refused += 1;
        }
    }
    let zoom = view.camera().zoom();
    assert!(refused > 0, "zooming in never hit the ceiling");
    assert!(zoom <= MAX_ZOOM && zoom > 0.0, "zoom drifted to {}", zoom);
    assert!(view.to_screen_x(1.0).is_finite());
    assert!(view.update_grid_spacing() > 0.0);

    // A refused step leaves the camera where it was
    assert_eq!(view.camera_mut().zoom_in(), Err(SimError::InvalidZoom(zoom * DEFAULT_ZOOM_FACTOR)));
    assert_eq!(view.camera().zoom(), zoom);
}

#[test]
fn camera_pan_is_in_simulation_units() {
    let mut camera = Camera::new(NVec2::new(1.0, 1.0), 100.0).unwrap();
    camera.pan(NVec2::new(2.0, -3.0));
    assert_eq!(camera.center(), NVec2::new(3.0, -2.0));
    assert_eq!(camera.zoom(), 100.0);
}

// ==================================================================================
// Coordinate mapping tests
// ==================================================================================

#[test]
fn camera_center_maps_to_viewport_middle() {
    let mut view = mapper(20.0);
    view.camera_mut().set_center(NVec2::new(-7.0, 3.5));

    let mid = view.to_screen(NVec2::new(-7.0, 3.5));
    assert_eq!(mid, NVec2::new(400.0, 300.0));

    assert_eq!(view.to_screen_x(-6.0), 420.0);
    assert_eq!(view.to_screen_y(2.5), 280.0);
}

#[test]
fn screen_simulation_round_trip() {
    let mut view = mapper(3.7);
    view.camera_mut().set_center(NVec2::new(123.456, -78.9));

    for p in [NVec2::new(0.0, 0.0), NVec2::new(800.0, 600.0), NVec2::new(13.25, 591.5)] {
        let back = view.to_screen(view.to_simulation(p));
        assert!((back - p).magnitude() < 1e-9, "{:?} -> {:?}", p, back);
    }

    for p in [NVec2::new(1e3, -1e3), NVec2::new(-0.001, 0.002), NVec2::new(123.0, -79.0)] {
        let back = view.to_simulation(view.to_screen(p));
        assert!((back - p).magnitude() < 1e-9 * p.magnitude().max(1.0), "{:?} -> {:?}", p, back);
    }
}

#[test]
fn lengths_scale_with_zoom() {
    let view = mapper(4.0);
    assert_eq!(view.length_to_screen(2.5), 10.0);
    assert_eq!(view.length_to_simulation(10.0), 2.5);
}

#[test]
fn scroll_delta_pans_camera() {
    let mut view = mapper(20.0);
    view.pan_by_screen_delta(40.0, 20.0);
    assert_eq!(view.camera().center(), NVec2::new(-2.0, 1.0));
}

#[test]
fn non_origin_bounds_use_their_midpoint() {
    let camera = Camera::new(NVec2::zeros(), 1.0).unwrap();
    let bounds = Bounds::new(NVec2::new(100.0, 50.0), NVec2::new(300.0, 250.0)).unwrap();
    let view = ViewportMapper::new(camera, bounds);

    assert_eq!(view.to_screen(NVec2::zeros()), NVec2::new(200.0, 150.0));
    assert_eq!(view.to_simulation(NVec2::new(100.0, 50.0)), NVec2::new(-100.0, -100.0));
}

#[test]
fn bounds_validation() {
    assert_eq!(Bounds::from_size(0.0, 10.0), Err(SimError::InvalidBounds));
    assert_eq!(Bounds::new(NVec2::new(5.0, 0.0), NVec2::new(1.0, 1.0)), Err(SimError::InvalidBounds));
    assert!(Bounds::from_size(f64::NAN, 10.0).is_err());

    let b = Bounds::from_size(800.0, 600.0).unwrap();
    assert!(b.contains(NVec2::new(800.0, 0.0)));
    assert!(!b.contains(NVec2::new(800.1, 0.0)));
}

// ==================================================================================
// Grid spacing tests
// ==================================================================================

#[test]
fn grid_spacing_snaps_to_round_values() {
    // (minimum simulation length, expected spacing)
    let cases = [
        (17.0, 20.0),
        (213.0, 500.0),
        (0.7, 1.0),
        (6000.0, 10000.0),
        (3.0, 5.0),
        (12.0, 20.0),
        (60.0, 100.0),
        (0.0042, 0.005),
        // exact powers of ten take the next candidate up
        (1.0, 2.0),
        (100.0, 200.0),
        (1000.0, 2000.0),
        (100000.0, 200000.0),
    ];
    for (min_length, expected) in cases {
        let spacing = grid_spacing_for_zoom(1.0, min_length);
        assert!(close(spacing, expected, 1e-12), "{} -> {}, expected {}", min_length, spacing, expected);
    }
}

#[test]
fn grid_spacing_is_monotonic_and_legible() {
    let mut zoom = 1e-6;
    let mut previous = f64::INFINITY;

    while zoom < 1e6 {
        let spacing = grid_spacing_for_zoom(zoom, MIN_GRID_PIXELS);
        let on_screen = spacing * zoom;

        assert!(spacing <= previous, "spacing grew from {} to {} at zoom {}", previous, spacing, zoom);
        assert!(on_screen >= MIN_GRID_PIXELS * (1.0 - 1e-12), "zoom {}: {} px", zoom, on_screen);
        assert!(on_screen <= MIN_GRID_PIXELS * 2.5 * (1.0 + 1e-12), "zoom {}: {} px", zoom, on_screen);

        previous = spacing;
        zoom *= 1.07;
    }
}

#[test]
fn grid_spacing_cache_tracks_zoom() {
    let mut view = mapper(5.0);
    assert_eq!(view.grid_spacing(), Some(20.0));

    view.camera_mut().zoom_in().unwrap();
    assert_eq!(view.grid_spacing(), None);
    assert!(view.vertical_gridlines().is_none());

    let spacing = view.update_grid_spacing();
    assert_eq!(view.grid_spacing(), Some(spacing));
    assert!(view.length_to_screen(spacing) >= MIN_GRID_PIXELS);

    // Same zoom, same answer
    assert_eq!(view.update_grid_spacing(), spacing);
}

// ==================================================================================
// Gridline enumeration tests
// ==================================================================================

#[test]
fn gridlines_cover_viewport() {
    // zoom 20 -> minimum length 3 -> spacing 5; visible x in [-20, 20], y in [-15, 15]
    let view = mapper(20.0);
    assert_eq!(view.grid_spacing(), Some(5.0));

    let vertical: Vec<_> = view.vertical_gridlines().unwrap().collect();
    let xs: Vec<f64> = vertical.iter().map(|l| l.sim).collect();
    assert_eq!(xs, vec![-20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(vertical.first().unwrap().screen, 0.0);
    assert_eq!(vertical.last().unwrap().screen, 800.0);

    let horizontal: Vec<_> = view.horizontal_gridlines().unwrap().collect();
    assert_eq!(horizontal.len(), 7);
    assert_eq!(horizontal[0].sim, -15.0);
}

#[test]
fn gridlines_stay_apart_when_panned() {
    let mut view = mapper(0.37);
    view.camera_mut().set_center(NVec2::new(12345.6, -987.6));
    view.update_grid_spacing();

    let lines: Vec<_> = view.vertical_gridlines().unwrap().collect();
    assert!(!lines.is_empty());
    for l in &lines {
        assert!(l.screen >= 0.0 && l.screen <= 800.0);
    }
    for pair in lines.windows(2) {
        assert!(pair[1].screen - pair[0].screen >= MIN_GRID_PIXELS - 1e-9);
    }
}

#[test]
fn gridlines_end_for_far_panned_camera() {
    for zoom in [1.0, 1e-3, 250.0] {
        let mut view = mapper(zoom);
        view.camera_mut().set_center(NVec2::new(1e20, -3e19));
        view.update_grid_spacing();

        let vertical = view.vertical_gridlines().unwrap().take(1000).count();
        let horizontal = view.horizontal_gridlines().unwrap().take(1000).count();

        // No more lines than fit at 60 px apart
        assert!(vertical <= (800.0 / MIN_GRID_PIXELS) as usize + 2, "zoom {}: {} vertical lines", zoom, vertical);
        assert!(horizontal <= (600.0 / MIN_GRID_PIXELS) as usize + 2, "zoom {}: {} horizontal lines", zoom, horizontal);
    }
}

// ==================================================================================
// Axis / origin tests
// ==================================================================================

#[test]
fn axes_visible_only_when_on_screen() {
    let mut view = mapper(20.0);
    assert_eq!(view.x_axis_screen_y(1.0), Some(300.0));
    assert_eq!(view.y_axis_screen_x(1.0), Some(400.0));
    assert!(view.origin_marker(4.0).is_some());

    view.camera_mut().pan(NVec2::new(1000.0, 0.0));
    assert_eq!(view.y_axis_screen_x(1.0), None);
    assert_eq!(view.x_axis_screen_y(1.0), Some(300.0));
    assert!(view.origin_marker(4.0).is_none());

    // Clipped onto the left edge
    assert_eq!(view.to_screen_clipped(NVec2::zeros()), NVec2::new(0.0, 300.0));
}

#[test]
fn clip_clamps_into_range() {
    assert_eq!(clip(-3.0, 0.0, 10.0), 0.0);
    assert_eq!(clip(4.0, 0.0, 10.0), 4.0);
    assert_eq!(clip(12.0, 0.0, 10.0), 10.0);
}
