//! Integration tests for the request surface

mod common;
use common::*;

use neo_patterns::config::{DEFAULT_PIXEL_COUNT, HELP_TEXT};
use neo_patterns::{
    BootStage, Color, CommandError, Direction, Pattern, PatternCommand, PatternEngine, Route,
    WHITE, handle_request,
};

fn engine(pixels: usize) -> PatternEngine<RecordingSink<16>, CountingHandler> {
    PatternEngine::new(RecordingSink::new(pixels), CountingHandler::default())
}

#[test]
fn help_routes_answer_with_usage() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    for path in ["/", "/help"] {
        let reply = handle_request(&mut engine, path, "");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, HELP_TEXT);
    }
    assert_eq!(engine.state().pattern(), Pattern::None);
}

#[test]
fn fixed_color_routes_start_wipes() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    for (path, label, color) in [
        ("/R", "Red", Color::rgb(255, 0, 0)),
        ("/G", "Green", Color::rgb(0, 255, 0)),
        ("/B", "Blue", Color::rgb(0, 0, 255)),
    ] {
        let reply = handle_request(&mut engine, path, "");
        assert_eq!((reply.status, reply.body), (200, label));
        assert_eq!(engine.state().pattern(), Pattern::ColorWipe);
        assert_eq!(engine.state().color1(), color);
        assert_eq!(engine.state().interval(), 50);
    }
}

#[test]
fn scanner_and_rainbow_routes() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);

    let reply = handle_request(&mut engine, "/W", "");
    assert_eq!(reply.body, "White Scanner");
    assert_eq!(engine.state().pattern(), Pattern::Scanner);
    assert_eq!(engine.state().color1(), WHITE);
    assert_eq!(engine.state().total_steps(), 12);

    for (path, label, interval) in [
        ("/X", "Rainbow", 20),
        ("/Y", "Rainbow Cycle", 10),
        ("/Z", "Chaser Rainbow", 50),
    ] {
        let reply = handle_request(&mut engine, path, "");
        assert_eq!((reply.status, reply.body), (200, label));
        assert_eq!(engine.state().pattern(), Pattern::RainbowCycle);
        assert_eq!(engine.state().interval(), interval);
    }
}

#[test]
fn set_route_uses_query_channels() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    let reply = handle_request(&mut engine, "/set", "?R=12&G=34&B=56");

    assert_eq!((reply.status, reply.body), (200, "RGB Color"));
    assert_eq!(engine.state().color1(), Color::rgb(12, 34, 56));
    assert_eq!(engine.state().interval(), 30);
}

#[test]
fn bad_set_arguments_are_client_errors_and_keep_the_pattern() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    handle_request(&mut engine, "/X", "");

    for query in ["", "R=1&G=2", "R=1&G=two&B=3", "R=300&G=0&B=0", "R=-1&G=0&B=0"] {
        let reply = handle_request(&mut engine, "/set", query);
        assert_eq!((reply.status, reply.body), (400, "BAD ARGS"), "query {query:?}");
        assert_eq!(engine.state().pattern(), Pattern::RainbowCycle);
    }
}

#[test]
fn unknown_route_answers_not_found_with_usage() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    let reply = handle_request(&mut engine, "/nope", "");
    assert_eq!((reply.status, reply.body), (404, HELP_TEXT));
    assert_eq!(Route::parse("/nope", ""), Err(CommandError::UnknownRoute));
}

#[test]
fn scanner_on_single_pixel_strip_is_a_server_error() {
    let mut engine = engine(1);
    let reply = handle_request(&mut engine, "/W", "");
    assert_eq!(reply.status, 500);
    assert_eq!(engine.state().pattern(), Pattern::None);
}

#[test]
fn boot_sequence_walks_red_green_blue_then_rainbow() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    let mut wipes = heapless::Vec::<Color, 4>::new();
    for stage in BootStage::SEQUENCE {
        engine.handle_command(stage.command()).unwrap();
        if engine.state().pattern() == Pattern::ColorWipe {
            wipes.push(engine.state().color1()).unwrap();
        }
    }
    assert_eq!(
        wipes.as_slice(),
        &[Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)]
    );
    assert_eq!(engine.state().pattern(), Pattern::RainbowCycle);
    assert_eq!(engine.state().interval(), 16);
}

#[test]
fn reverse_and_stop_commands() {
    let mut engine = engine(DEFAULT_PIXEL_COUNT);
    engine
        .handle_command(PatternCommand::TheaterChase {
            color1: WHITE,
            color2: Color::rgb(0, 0, 0),
            interval: 40,
            direction: Direction::Forward,
        })
        .unwrap();

    engine.handle_command(PatternCommand::Reverse).unwrap();
    assert_eq!(engine.state().direction(), Direction::Reverse);
    assert_eq!(engine.state().index(), 6);

    engine.handle_command(PatternCommand::Stop).unwrap();
    assert_eq!(engine.state().pattern(), Pattern::None);
}
