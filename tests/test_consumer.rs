// Consumer tests
// Author: Gabriel Demetrios Lafis

use std::io;

use mockall::predicate::eq;
use mockall::{mock, Sequence};

use record_pipeline::{
    data::{sample_users, UserRecord},
    processing::{consumer_fn, write_output, Consumer, ProcessingError, RecordPipeline},
};

mock! {
    pub Sink {}

    impl Consumer for Sink {
        fn consume(&mut self, value: String) -> Result<(), ProcessingError>;
    }
}

#[test]
fn test_consumer_called_in_order() {
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();

    sink.expect_consume()
        .with(eq("LAWRENCE PEMBERTON".to_string()))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    sink.expect_consume()
        .with(eq("JENNIFER MATTHEWS".to_string()))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let summary = RecordPipeline::reference("mock")
        .run(sample_users(), &mut sink)
        .unwrap();

    assert_eq!(summary.delivered, 2);
}

#[test]
fn test_consumer_never_called_for_empty_input() {
    let mut sink = MockSink::new();
    sink.expect_consume().never();

    let summary = RecordPipeline::reference("mock").run(&[], &mut sink).unwrap();

    assert_eq!(summary.delivered, 0);
}

#[test]
fn test_consumer_never_called_when_nothing_matches() {
    let mut sink = MockSink::new();
    sink.expect_consume().never();

    let users = vec![
        UserRecord::new("BrianD", "Brian Doheny"),
        UserRecord::new(" X", "Leading Space"),
    ];
    let summary = RecordPipeline::reference("mock").run(&users, &mut sink).unwrap();

    assert_eq!(summary.input, 2);
    assert_eq!(summary.delivered, 0);
}

#[test]
fn test_first_consumer_error_stops_run() {
    let mut sink = MockSink::new();
    sink.expect_consume()
        .times(1)
        .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into()));

    let result = RecordPipeline::reference("mock").run(sample_users(), &mut sink);

    assert!(matches!(result, Err(ProcessingError::Output(_))));
}

#[test]
fn test_dyn_consumer() {
    let mut lines: Vec<u8> = Vec::new();
    {
        let mut consumer = consumer_fn(|value| write_output(&mut lines, &value));
        let consumer: &mut dyn Consumer = &mut consumer;

        RecordPipeline::reference("dyn")
            .run(sample_users(), consumer)
            .unwrap();
    }

    assert_eq!(lines, b"LAWRENCE PEMBERTON\nJENNIFER MATTHEWS\n");
}
