use life_canvas::config::{DEFAULT_ZOOM, MAX_CELL_HEIGHT, MAX_CELL_WIDTH};
use life_canvas::session::{Command, Flow, FrameInput, InputEvent, Mode, Session};
use life_canvas::viewport::{PanInput, ScreenRect};

fn command(session: &mut Session, command: Command) {
    assert_eq!(session.handle_event(InputEvent::Command(command)), Flow::Continue);
}

fn drag(session: &mut Session, points: &[(i32, i32)], hud: &[ScreenRect]) {
    for &pointer in points {
        session.update(
            &FrameInput {
                pointer,
                primary_held: true,
                ..Default::default()
            },
            hud,
        );
    }
    session.update(&FrameInput::default(), hud);
}

#[test]
fn starts_with_empty_full_size_board() {
    let session = Session::new(Some(1));
    assert_eq!(session.grid().width(), MAX_CELL_WIDTH);
    assert_eq!(session.grid().height(), MAX_CELL_HEIGHT);
    assert_eq!(session.population(), 0);
    assert_eq!(session.mode(), Mode::Interim);
    assert_eq!(session.viewport().zoom, DEFAULT_ZOOM);
}

#[test]
fn paint_a_glider_and_watch_it_move() {
    let mut session = Session::new(Some(2));
    command(&mut session, Command::ToggleEdit);

    // zoom 4: cell (c, r) sits under pixel (4c+1, 4r+1)
    let px = |col: i32, row: i32| (col * 4 + 1, row * 4 + 1);
    for (col, row) in [(21, 20), (22, 21), (20, 22), (21, 22), (22, 22)] {
        drag(&mut session, &[px(col, row)], &[]);
    }
    assert_eq!(session.population(), 5);

    command(&mut session, Command::PlayPause);
    assert_eq!(session.mode(), Mode::Interim);
    for _ in 0..4 {
        session.update(&FrameInput::default(), &[]);
    }

    assert_eq!(session.generation(), 4);
    assert_eq!(session.population(), 5);
    // After four generations a glider is the same shape shifted one cell down-right
    for (col, row) in [(22, 21), (23, 22), (21, 23), (22, 23), (23, 23)] {
        assert!(session.grid().get(col, row), "expected ({col}, {row}) alive");
    }
}

#[test]
fn erase_drag_clears_a_line() {
    let mut session = Session::new(Some(3));
    command(&mut session, Command::ToggleEdit);

    let row: Vec<(i32, i32)> = (10..30).map(|col| (col * 4, 100)).collect();
    drag(&mut session, &row, &[]);
    assert_eq!(session.population(), 20);

    // Starting on a live cell erases, even across dead cells on the way
    let back: Vec<(i32, i32)> = (5..35).rev().map(|col| (col * 4, 100)).collect();
    drag(&mut session, &back[5..], &[]);
    assert_eq!(session.population(), 0);
}

#[test]
fn hud_zones_swallow_clicks() {
    let mut session = Session::new(Some(4));
    command(&mut session, Command::ToggleEdit);
    let hud = [ScreenRect::new(0, 0, 100, 40)];

    drag(&mut session, &[(10, 10), (50, 20)], &hud);
    assert_eq!(session.population(), 0);

    drag(&mut session, &[(10, 60)], &hud);
    assert_eq!(session.population(), 1);
}

#[test]
fn random_reset_then_blank_reset() {
    let mut session = Session::new(Some(5));
    command(&mut session, Command::ToggleRandom);
    command(&mut session, Command::Reset);
    let seeded = session.population();
    assert!(seeded > 0);
    assert_eq!(seeded, session.grid().count_alive());

    command(&mut session, Command::ToggleBlank);
    command(&mut session, Command::Reset);
    assert_eq!(session.population(), 0);
    assert_eq!(session.mode(), Mode::Blank);
}

#[test]
fn same_seed_same_board() {
    let build = || {
        let mut session = Session::new(Some(99));
        command(&mut session, Command::ToggleRandom);
        command(&mut session, Command::Reset);
        session
    };
    assert_eq!(build().grid(), build().grid());
}

#[test]
fn random_soup_keeps_population_consistent_while_playing() {
    let mut session = Session::new(Some(6));
    command(&mut session, Command::ToggleRandom);
    command(&mut session, Command::Reset);
    command(&mut session, Command::PlayPause);

    for _ in 0..5 {
        session.update(&FrameInput::default(), &[]);
        assert_eq!(session.population(), session.grid().count_alive());
    }
    assert_eq!(session.generation(), 5);
}

#[test]
fn pan_and_zoom_shift_painting_target() {
    let mut session = Session::new(Some(7));
    session.handle_event(InputEvent::MouseWheel(6));
    assert_eq!(session.viewport().zoom, 8);

    let pan_left = FrameInput {
        pan: PanInput {
            left: true,
            ..Default::default()
        },
        ..Default::default()
    };
    session.update(&pan_left, &[]);
    session.update(&pan_left, &[]);
    assert_eq!(session.viewport().offset_x, 2);

    command(&mut session, Command::ToggleEdit);
    drag(&mut session, &[(80, 80)], &[]);
    // 80 / 8 = 10, minus the pan offset of 2
    assert!(session.grid().get(8, 10));
}

#[test]
fn escape_or_quit_exits() {
    let mut session = Session::new(Some(8));
    assert_eq!(session.handle_event(InputEvent::MouseWheel(1)), Flow::Continue);
    assert_eq!(session.handle_event(InputEvent::Quit), Flow::Exit);
}
