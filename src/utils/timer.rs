use std::time::Duration;

/// Resolve after `duration` without blocking the caller's executor.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use wasm_bindgen::JsValue;

    if duration.is_zero() {
        return;
    }

    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis).is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            log::warn!("setTimeout unavailable, resolving {}ms sleep immediately", millis);
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Resolve after `duration` without blocking the caller's executor.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    use futures::channel::oneshot;

    if duration.is_zero() {
        return;
    }

    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        std::thread::sleep(duration);
        let _ = tx.send(());
    });
    if rx.await.is_err() {
        log::error!("Timer thread dropped before firing");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_sleep_waits_at_least_duration() {
        let start = Instant::now();
        futures::executor::block_on(sleep(Duration::from_millis(30)));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_zero_sleep_is_immediate() {
        futures::executor::block_on(sleep(Duration::ZERO));
    }
}
