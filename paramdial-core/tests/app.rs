//! End-to-end behavior of the application loop against fake peripherals

mod common;

use common::{boot, press, send, turn};
use paramdial_core::MAX_PARAMS;
use paramdial_display::DisplayMode;
use paramdial_hal::{Line, RxError};

#[test]
fn test_boot_splash() {
    let (app, board) = boot();
    assert_eq!(board.display.row(0), "Waiting for");
    assert_eq!(board.display.row(1), "parameters...");
    assert_eq!(app.selected(), None);
    assert_eq!(app.label(), "Unknown");
}

#[test]
fn test_first_add_selects_and_paints() {
    let (mut app, mut board) = boot();

    let out = send(&mut app, &mut board, "add:param,Speed,0,100,50");
    assert_eq!(out, ["A,Speed"]);
    assert_eq!(app.selected(), Some(0));

    assert_eq!(board.display.row(0), "");
    assert_eq!(board.display.row(3), "Parameter: Speed");
    assert_eq!(board.display.row(4), "Value: 50");
    assert_eq!(board.display.row(7), "Software: Unknown");
    assert_eq!(board.display.bar(), 64);
}

#[test]
fn test_second_add_keeps_display() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");
    let flushes = board.display.flushes;

    let out = send(&mut app, &mut board, "add:param,Gain,-10,10,3");
    assert_eq!(out, ["A,Gain"]);
    assert_eq!(app.selected(), Some(0));
    assert_eq!(board.display.flushes, flushes);
}

#[test]
fn test_add_echoes_truncated_name() {
    let (mut app, mut board) = boot();
    let out = send(&mut app, &mut board, "add:param,AVeryLongParameterName,0,1,0");
    assert_eq!(out, ["A,AVeryLongParam"]);
}

#[test]
fn test_get_update_round_trip() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");

    assert_eq!(send(&mut app, &mut board, "get:paramCurval,Speed"), ["G,Speed,50"]);
    assert_eq!(
        send(&mut app, &mut board, "update:paramsCurval,Speed,150"),
        ["U,Speed,100"]
    );
    assert_eq!(send(&mut app, &mut board, "get:paramCurval,Speed"), ["G,Speed,100"]);
    assert_eq!(
        send(&mut app, &mut board, "get:paramCurval,Missing"),
        ["G,Missing,ERROR"]
    );
    assert_eq!(
        send(&mut app, &mut board, "update:paramsCurval,Missing,1"),
        ["U,Missing,ERROR"]
    );
}

#[test]
fn test_negative_one_is_not_an_error() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Offset,-5,5,-1");
    assert_eq!(
        send(&mut app, &mut board, "get:paramCurval,Offset"),
        ["G,Offset,-1"]
    );
}

#[test]
fn test_update_repaints_that_parameter() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");
    send(&mut app, &mut board, "add:param,Gain,-10,10,3");

    send(&mut app, &mut board, "update:paramsCurval,Gain,-10");
    assert_eq!(board.display.row(3), "Parameter: Gain");
    assert_eq!(board.display.row(4), "Value: -10");
    assert_eq!(board.display.bar(), 0);
    // Selection is untouched
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_malformed_commands() {
    let (mut app, mut board) = boot();

    let cases = [
        ("update:paramsCurval,Speed", "ERR,Invalid update:paramsCurval format"),
        ("add:param,Speed,0,100", "ERR,Invalid add:param format"),
        ("add:param", "ERR,Invalid add:param format"),
        ("get:paramCurval", "ERR,Invalid get:paramCurval format"),
        ("set:software", "ERR,Invalid set:software format"),
        ("read:digital", "ERR,Invalid read:digital format"),
        ("read:analog", "ERR,Invalid read:analog format"),
        ("reboot", "ERR,Unknown command"),
        ("ADD:PARAM,a,0,1,0", "ERR,Unknown command"),
    ];
    for (line, expected) in cases {
        assert_eq!(send(&mut app, &mut board, line), [expected], "{}", line);
    }
    assert!(app.registry().is_empty());
}

#[test]
fn test_blank_line_is_ignored() {
    let (mut app, mut board) = boot();
    assert!(send(&mut app, &mut board, "   ").is_empty());
}

#[test]
fn test_list_after_overflow() {
    let (mut app, mut board) = boot();
    for i in 0..6 {
        send(&mut app, &mut board, &format!("add:param,P{},0,10,{}", i, i));
    }

    let out = send(&mut app, &mut board, "get:AlladdedParams");
    assert_eq!(out.len(), MAX_PARAMS);
    assert_eq!(
        out,
        [
            "L,0,P5,0,10,5",
            "L,1,P1,0,10,1",
            "L,2,P2,0,10,2",
            "L,3,P3,0,10,3",
            "L,4,P4,0,10,4",
        ]
    );
    assert!(!out.iter().any(|line| line.contains(",P0,")));
}

#[test]
fn test_list_empty_registry_sends_nothing() {
    let (mut app, mut board) = boot();
    assert!(send(&mut app, &mut board, "get:AlladdedParams").is_empty());
}

#[test]
fn test_one_command_per_tick() {
    let (mut app, mut board) = boot();
    board.serial.push("add:param,A,0,1,0");
    board.serial.push("add:param,B,0,1,0");

    app.tick(&mut board);
    assert_eq!(board.serial.sent, ["A,A"]);
    app.tick(&mut board);
    assert_eq!(board.serial.sent, ["A,A", "A,B"]);
}

#[test]
fn test_receive_errors_are_reported() {
    let (mut app, mut board) = boot();

    board.serial.incoming.push_back(Err(RxError::Overrun));
    board.serial.incoming.push_back(Err(RxError::Encoding));
    board.serial.incoming.push_back(Err(RxError::Transport));
    app.tick(&mut board);
    app.tick(&mut board);
    app.tick(&mut board);

    assert_eq!(
        board.serial.sent,
        ["ERR,Line too long", "ERR,Invalid encoding"]
    );
}

#[test]
fn test_set_software_without_selection() {
    let (mut app, mut board) = boot();
    let clears = board.display.clears;

    let out = send(&mut app, &mut board, "set:software,  Mixer  ");
    assert_eq!(out, ["Mixer"]);
    assert_eq!(app.label(), "Mixer");
    assert_eq!(board.display.clears, clears + 1);
    assert_eq!(board.display.row(0), "");
    assert_eq!(board.display.row(7), "Software: Mixer");
}

#[test]
fn test_set_software_truncates_label() {
    let (mut app, mut board) = boot();
    let out = send(
        &mut app,
        &mut board,
        "set:software,0123456789012345678901234567890123456789",
    );
    assert_eq!(out, ["0123456789012345678901234567890"]);
    assert_eq!(app.label().len(), 31);
}

#[test]
fn test_set_software_repaints_full_view() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");
    send(&mut app, &mut board, "set:software,A long label");
    send(&mut app, &mut board, "set:software,Short");

    assert_eq!(board.display.row(3), "Parameter: Speed");
    assert_eq!(board.display.row(7), "Software: Short");
}

#[test]
fn test_set_software_in_rapid_mode_keeps_rapid_view() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");
    turn(&mut app, &mut board, 1, 1_000);
    turn(&mut app, &mut board, 1, 1_100);
    assert_eq!(app.display_mode(), DisplayMode::Rapid);

    board.clock.now = 1_200;
    let out = send(&mut app, &mut board, "set:software,Mixer");
    assert_eq!(out, ["Mixer"]);
    assert_eq!(board.display.row(3), "        52");
    assert_eq!(board.display.row(7), "");
}

#[test]
fn test_encoder_adjusts_selected() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");

    let out = turn(&mut app, &mut board, 3, 1_000);
    assert_eq!(out, ["U,Speed,53"]);
    assert_eq!(app.registry().current("Speed"), Some(53));
    assert_eq!(app.display_mode(), DisplayMode::Full);
    assert_eq!(board.display.row(4), "Value: 53");

    let out = turn(&mut app, &mut board, -60, 5_000);
    assert_eq!(out, ["U,Speed,0"]);
}

#[test]
fn test_encoder_at_bound_sends_nothing() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,100");
    let flushes = board.display.flushes;

    assert!(turn(&mut app, &mut board, 1, 1_000).is_empty());
    assert_eq!(board.display.flushes, flushes);
    assert_eq!(app.registry().current("Speed"), Some(100));
}

#[test]
fn test_encoder_without_selection_is_consumed() {
    let (mut app, mut board) = boot();
    assert!(turn(&mut app, &mut board, 4, 1_000).is_empty());

    // The turn made before any parameter existed is not replayed later
    send(&mut app, &mut board, "add:param,Speed,0,100,50");
    assert!(turn(&mut app, &mut board, 0, 2_000).is_empty());
    assert_eq!(app.registry().current("Speed"), Some(50));
}

#[test]
fn test_rapid_mode_hysteresis() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");

    turn(&mut app, &mut board, 1, 1_000);
    assert_eq!(app.display_mode(), DisplayMode::Full);
    let clears = board.display.clears;

    // Within the window: value only
    turn(&mut app, &mut board, 1, 1_300);
    assert_eq!(app.display_mode(), DisplayMode::Rapid);
    assert_eq!(board.display.clears, clears + 1);
    assert_eq!(board.display.row(3), "        52");
    assert_eq!(board.display.row(4), "");

    // Staying rapid does not clear again
    turn(&mut app, &mut board, 1, 1_500);
    assert_eq!(board.display.clears, clears + 1);
    assert_eq!(board.display.row(3), "        53");

    // Idle tick inside the window: no repaint
    let flushes = board.display.flushes;
    turn(&mut app, &mut board, 0, 2_099);
    assert_eq!(board.display.flushes, flushes);
    assert_eq!(app.display_mode(), DisplayMode::Rapid);

    // Window elapsed: back to the full view
    turn(&mut app, &mut board, 0, 2_100);
    assert_eq!(app.display_mode(), DisplayMode::Full);
    assert_eq!(board.display.flushes, flushes + 1);
    assert_eq!(board.display.clears, clears + 2);
    assert_eq!(board.display.row(3), "Parameter: Speed");
    assert_eq!(board.display.row(4), "Value: 53");

    // Later idle ticks stay quiet
    turn(&mut app, &mut board, 0, 9_000);
    assert_eq!(board.display.flushes, flushes + 1);
}

#[test]
fn test_slow_adjustments_stay_full() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,Speed,0,100,50");

    turn(&mut app, &mut board, 1, 1_000);
    turn(&mut app, &mut board, 1, 1_600);
    assert_eq!(app.display_mode(), DisplayMode::Full);
    assert_eq!(board.display.row(4), "Value: 52");
}

#[test]
fn test_button_cycles_selection() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,A,0,10,1");
    send(&mut app, &mut board, "add:param,B,0,10,2");
    send(&mut app, &mut board, "add:param,C,0,10,3");

    assert_eq!(press(&mut app, &mut board), ["S,1,B,2"]);
    assert_eq!(board.display.row(3), "Parameter: B");
    assert_eq!(press(&mut app, &mut board), ["S,2,C,3"]);
    assert_eq!(press(&mut app, &mut board), ["S,0,A,1"]);
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_button_is_debounced() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,A,0,10,1");
    send(&mut app, &mut board, "add:param,B,0,10,2");

    // Pressed on the first read, released on the confirming read
    board.button.samples.extend([true, false]);
    app.tick(&mut board);
    assert!(board.serial.sent.is_empty());
    assert_eq!(app.selected(), Some(0));
    assert_eq!(board.delay.total_ns, 50_000_000);
}

#[test]
fn test_held_button_fires_once() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,A,0,10,1");
    send(&mut app, &mut board, "add:param,B,0,10,2");

    board.button.pressed = true;
    for _ in 0..5 {
        app.tick(&mut board);
    }
    assert_eq!(board.serial.sent, ["S,1,B,2"]);
}

#[test]
fn test_button_on_empty_registry() {
    let (mut app, mut board) = boot();
    assert!(press(&mut app, &mut board).is_empty());
    assert_eq!(app.selected(), None);
}

#[test]
fn test_selection_forces_full_view() {
    let (mut app, mut board) = boot();
    send(&mut app, &mut board, "add:param,A,0,10,1");
    send(&mut app, &mut board, "add:param,B,0,10,2");
    turn(&mut app, &mut board, 1, 1_000);
    turn(&mut app, &mut board, 1, 1_100);
    assert_eq!(app.display_mode(), DisplayMode::Rapid);

    board.clock.now = 1_150;
    assert_eq!(press(&mut app, &mut board), ["S,1,B,2"]);
    assert_eq!(app.display_mode(), DisplayMode::Full);
    assert_eq!(board.display.row(3), "Parameter: B");
    assert_eq!(board.display.row(4), "Value: 2");

    // Knob now drives B
    assert_eq!(turn(&mut app, &mut board, -1, 5_000), ["U,B,1"]);
}

#[test]
fn test_read_digital() {
    let (mut app, mut board) = boot();
    board.pins.high.push(8);
    board.pins.reserved.push(2);

    assert_eq!(send(&mut app, &mut board, "read:digital,8"), ["D,8,1"]);
    assert_eq!(send(&mut app, &mut board, "read:digital, 9"), ["D,9,0"]);
    assert_eq!(
        send(&mut app, &mut board, "read:digital,2"),
        ["ERR,Invalid read:digital pin"]
    );
    assert_eq!(
        send(&mut app, &mut board, "read:digital,-1"),
        ["ERR,Invalid read:digital pin"]
    );
    assert_eq!(
        send(&mut app, &mut board, "read:digital,300"),
        ["ERR,Invalid read:digital pin"]
    );
}

#[test]
fn test_read_analog() {
    let (mut app, mut board) = boot();
    board.analog.base = 2_000;

    assert_eq!(send(&mut app, &mut board, "read:analog,0"), ["A,0,2000"]);
    assert_eq!(send(&mut app, &mut board, "read:analog,4"), ["A,4,2004"]);
    assert_eq!(
        send(&mut app, &mut board, "read:analog,7"),
        ["ERR,Invalid read:analog channel"]
    );
    assert_eq!(
        send(&mut app, &mut board, "read:analog,-2"),
        ["ERR,Invalid read:analog channel"]
    );

    board.analog.broken = true;
    assert_eq!(
        send(&mut app, &mut board, "read:analog,1"),
        ["ERR,Analog read failed"]
    );
}

#[test]
fn test_handle_line_directly() {
    let (mut app, mut board) = boot();
    let mut line = Line::new();
    line.push_str("add:param,Speed,0,100,50").unwrap();

    app.handle_line(&mut board, &line);
    assert_eq!(board.serial.sent, ["A,Speed"]);
}
