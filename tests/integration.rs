//! Integration tests for the bt-sink-remote dispatch logic.

use std::cell::RefCell;

use bt_sink_remote::event::{Command, SourceType};
use bt_sink_remote::input::{InputKind, InputSource};
use bt_sink_remote::{
    ButtonMap, ConfigError, DispatchError, Dispatcher, DisplayDriver, DisplayPattern, Event,
    InputEvent, LinkId, LinkState, LogicalButton, Mode, PeriphMessage, SinkError, Snapshot,
    TransportControl,
};
use heapless::Vec;

const LINK: LinkId = LinkId(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Call {
    Play,
    Pause,
    Next,
    Previous,
    SetPattern(DisplayPattern, i32),
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Call, 32>>,
}

impl Recorder {
    fn push(&self, call: Call) -> Result<(), SinkError> {
        self.calls.borrow_mut().push(call).expect("recorder full");
        Ok(())
    }

    fn take(&self) -> std::vec::Vec<Call> {
        let mut calls = self.calls.borrow_mut();
        let out = calls.iter().copied().collect();
        calls.clear();
        out
    }
}

struct Transport<'a>(&'a Recorder);
struct Display<'a>(&'a Recorder);

impl TransportControl for Transport<'_> {
    fn link(&self) -> LinkId {
        LINK
    }
    fn play(&mut self) -> Result<(), SinkError> {
        self.0.push(Call::Play)
    }
    fn pause(&mut self) -> Result<(), SinkError> {
        self.0.push(Call::Pause)
    }
    fn next(&mut self) -> Result<(), SinkError> {
        self.0.push(Call::Next)
    }
    fn previous(&mut self) -> Result<(), SinkError> {
        self.0.push(Call::Previous)
    }
}

impl DisplayDriver for Display<'_> {
    fn set_pattern(&mut self, pattern: DisplayPattern, param: i32) -> Result<(), SinkError> {
        self.0.push(Call::SetPattern(pattern, param))
    }
}

fn setup(rec: &Recorder) -> Dispatcher<Transport<'_>, Display<'_>> {
    let mut d = Dispatcher::new();
    d.init(Some(Transport(rec)), Some(Display(rec)))
        .expect("init with both sinks");
    d
}

fn tap(button: LogicalButton) -> Event {
    Event::Input(InputEvent::new(InputSource::Touch, InputKind::Tap, button))
}

#[test]
fn mode_record_sequence_returns_to_start() {
    let rec = Recorder::default();
    let mut d = setup(&rec);

    for button in [
        LogicalButton::Mode,
        LogicalButton::Record,
        LogicalButton::Mode,
        LogicalButton::Record,
    ] {
        d.handle(&tap(button)).unwrap();
    }

    assert_eq!(
        d.snapshot(),
        Snapshot {
            mode: Mode::Primary,
            recording: false
        }
    );
    assert_eq!(
        rec.take(),
        vec![
            Call::SetPattern(DisplayPattern::WakeupFinished, Mode::Secondary.as_param()),
            Call::SetPattern(DisplayPattern::RecordingStart, 100),
            Call::SetPattern(DisplayPattern::WakeupFinished, Mode::Primary.as_param()),
            Call::SetPattern(DisplayPattern::RecordingStop, 100),
        ]
    );
}

#[test]
fn transport_buttons_behave_the_same_in_both_modes() {
    let rec = Recorder::default();
    let mut d = setup(&rec);
    let buttons = [
        LogicalButton::Play,
        LogicalButton::Set,
        LogicalButton::VolUp,
        LogicalButton::VolDown,
    ];
    let expected = vec![Call::Play, Call::Pause, Call::Next, Call::Previous];

    for button in buttons {
        d.handle(&tap(button)).unwrap();
    }
    assert_eq!(rec.take(), expected);

    d.handle(&tap(LogicalButton::Mode)).unwrap();
    rec.take();

    for button in buttons {
        d.handle(&tap(button)).unwrap();
    }
    assert_eq!(rec.take(), expected);
}

#[test]
fn connection_events_follow_registered_link_only() {
    let rec = Recorder::default();
    let mut d = setup(&rec);
    let table = ButtonMap::BOARD;

    d.handle_message(&PeriphMessage::link(LinkState::Connected, LINK), &table)
        .unwrap();
    d.handle_message(&PeriphMessage::link(LinkState::Connected, LinkId(5)), &table)
        .unwrap();
    d.handle(&tap(LogicalButton::Mode)).unwrap();
    d.handle_message(&PeriphMessage::link(LinkState::Disconnected, LINK), &table)
        .unwrap();

    assert_eq!(
        rec.take(),
        vec![
            Call::SetPattern(DisplayPattern::BtConnected, 0),
            Call::SetPattern(DisplayPattern::WakeupFinished, 1),
            Call::SetPattern(DisplayPattern::BtDisconnected, 1),
        ]
    );
}

#[test]
fn unmapped_and_non_activation_messages_are_ignored() {
    let rec = Recorder::default();
    let mut d = setup(&rec);
    let table = ButtonMap::new(1, 2, 3, 4, 5, 6);

    let unmapped = PeriphMessage::input(SourceType::Button, Command::Pressed, 42);
    let release = PeriphMessage::input(SourceType::Button, Command::Released, 1);
    let foreign = PeriphMessage::input(SourceType::Other(3), Command::Pressed, 1);

    for msg in [unmapped, release, foreign] {
        assert_eq!(d.handle_message(&msg, &table), Ok(()));
    }
    assert!(rec.take().is_empty());
    assert_eq!(d.snapshot(), Snapshot::default());
}

#[test]
fn adc_button_press_resolves_through_board_table() {
    let rec = Recorder::default();
    let mut d = setup(&rec);
    let table = ButtonMap::BOARD;

    let msg = PeriphMessage::input(
        SourceType::AdcButton,
        Command::Pressed,
        table.id_of(LogicalButton::VolDown),
    );
    d.handle_message(&msg, &table).unwrap();

    assert_eq!(rec.take(), vec![Call::Previous]);
}

#[test]
fn unconfigured_dispatcher_rejects_events() {
    let rec = Recorder::default();
    let mut d: Dispatcher<Transport<'_>, Display<'_>> = Dispatcher::new();

    assert_eq!(
        d.handle(&tap(LogicalButton::Play)),
        Err(DispatchError::NotConfigured)
    );
    assert_eq!(
        d.init(Some(Transport(&rec)), None),
        Err(ConfigError::InvalidArgument)
    );
    assert_eq!(
        d.handle(&tap(LogicalButton::Play)),
        Err(DispatchError::NotConfigured)
    );
    assert!(rec.take().is_empty());
}
