//! Integration tests for the function registry and concurrent evaluation

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{evaluator, is_uuid, EvalError, Evaluator, Registry, Value, TEST_HASH};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_unregister_twice_is_noop() {
    let registry = Registry::with_builtins();
    registry.unregister("hash");
    registry.unregister("hash");
    assert!(!registry.contains("hash"));
}

#[test]
fn test_empty_registry_knows_nothing() {
    let eval = Evaluator::new(Arc::new(Registry::new()));
    assert_eq!(
        eval.eval("hash test").unwrap_err(),
        EvalError::UnsupportedFunction("hash".into())
    );
    // Literals need no functions
    assert_eq!(eval.eval("'plain'").unwrap(), "plain");
}

#[test]
fn test_registries_are_isolated() {
    let (first, first_eval) = evaluator();
    let (_, second_eval) = evaluator();

    first.register("shout", |args: &[String]| Ok(Value::from(args.join(" "))));
    assert!(first_eval.eval("shout hi").is_ok());
    assert!(second_eval.eval("shout hi").is_err());
}

#[test]
fn test_concurrent_evaluation() {
    let eval = Evaluator::default();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(eval.eval("hash test").unwrap(), TEST_HASH);
                    assert!(is_uuid(&eval.eval("uuid").unwrap().to_string()));
                }
            });
        }
    });
}

#[test]
fn test_registration_during_evaluation() {
    let (registry, eval) = evaluator();
    let stop = AtomicBool::new(false);

    thread::scope(|scope| {
        // Readers keep evaluating built-ins while a writer churns a custom function
        for _ in 0..4 {
            scope.spawn(|| {
                while !stop.load(Ordering::Relaxed) {
                    assert_eq!(eval.eval("'test'|hash").unwrap(), TEST_HASH);
                    match eval.eval("flip x") {
                        Ok(value) => assert_eq!(value, "x"),
                        Err(err) => assert_eq!(err, EvalError::UnsupportedFunction("flip".into())),
                    }
                }
            });
        }

        scope.spawn(|| {
            for _ in 0..500 {
                registry.register("flip", |args: &[String]| Ok(Value::from(args[0].clone())));
                registry.unregister("flip");
            }
            stop.store(true, Ordering::Relaxed);
        });
    });
}

#[test]
fn test_slow_handler_does_not_block_registry() {
    let (registry, eval) = evaluator();
    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));

    let (handler_entered, handler_release) = (Arc::clone(&entered), Arc::clone(&release));
    registry.register("slow", move |_args: &[String]| {
        handler_entered.wait();
        handler_release.wait();
        Ok(Value::from("done"))
    });

    thread::scope(|scope| {
        let running = scope.spawn(|| eval.eval("slow"));

        entered.wait();
        // The handler is mid-call; the registry must still accept writes and reads
        registry.register("other", |_args: &[String]| Ok(Value::Null));
        assert!(registry.contains("other"));
        assert_eq!(eval.eval("hash test").unwrap(), TEST_HASH);
        release.wait();

        assert_eq!(running.join().unwrap().unwrap(), "done");
    });
}

#[test]
fn test_evaluator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Evaluator>();
    assert_send_sync::<Registry>();

    let eval = Arc::new(Evaluator::default());
    let worker = Arc::clone(&eval);
    let handle = thread::spawn(move || worker.eval("now").map(|v| v.to_string()));
    assert!(handle.join().unwrap().is_ok());
}
