use assert_call::{call, CallRecorder};

use super::*;

#[test]
fn complete_calls_once() {
    let mut cr = CallRecorder::new();
    let c = Completion::from_fn(|finished| call!("done {finished}"));
    cr.verify(());
    c.complete(true);
    cr.verify("done true");
}

#[test]
fn drop_without_complete_reports_failure() {
    let mut cr = CallRecorder::new();
    let c = Completion::from(|finished: bool| call!("done {finished}"));
    drop(c);
    cr.verify("done false");
}

#[test]
fn none_does_nothing() {
    let mut cr = CallRecorder::new();
    Completion::none().complete(true);
    drop(Completion::default());
    drop(Completion::from_option(None::<fn(bool)>));
    cr.verify(());
}

#[test]
fn from_option_some() {
    let mut cr = CallRecorder::new();
    Completion::from_option(Some(|finished: bool| call!("done {finished}"))).complete(false);
    cr.verify("done false");
}
