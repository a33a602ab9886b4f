use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use log::info;

use gpiort::{
    Context, DigitalState, GpioError, InputConfig, ListenerResult, MockDigitalInputProvider,
    MockDigitalOutputProvider, Provider, ProviderRegistry, Pull, StateEvent,
};

const PIN_BUTTON: u32 = 24;
const PIN_LED: u32 = 22;
const TARGET_PRESSES: u32 = 5;

// Port of the classic "blink a LED, count five button presses" example,
// wired to the mock provider with a thread simulating the button.
fn main() -> Result<(), GpioError> {
    env_logger::init();

    let output_provider = Arc::new(MockDigitalOutputProvider::default());
    let input_provider = Arc::new(MockDigitalInputProvider::default());

    let mut registry = ProviderRegistry::new();
    registry.register(Provider::DigitalOutput(output_provider))?;
    registry.register(Provider::DigitalInput(input_provider.clone()))?;

    let context = Context::new(registry);
    for (kind, name) in context.registry().iter() {
        println!("Provider for {kind}: {name}");
    }

    let led = context.digital_output().create(PIN_LED)?;

    let button = context.create(
        InputConfig::builder()
            .id("button")
            .name("Press button")
            .address(PIN_BUTTON)
            .pull(Pull::PullDown)
            .debounce(Duration::from_millis(50)),
    )?;

    let presses = Arc::new(AtomicU32::new(0));
    {
        let presses = presses.clone();
        button.add_listener(move |event: &StateEvent| -> ListenerResult {
            if event.state() == DigitalState::Low {
                let count = presses.fetch_add(1, Ordering::SeqCst) + 1;
                println!("Button was pressed for the {count}th time");
            }
            Ok(())
        })?;
    }

    // Simulated button wiring: a press drives the line high, releasing it
    // drops back to low, which is the edge the listener counts.
    let stop = Arc::new(AtomicBool::new(false));
    let source = {
        let input_provider = input_provider.clone();
        let stop = stop.clone();
        thread::spawn(move || {
            while !stop.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(250));
                input_provider.inject(PIN_BUTTON, DigitalState::High);
                thread::sleep(Duration::from_millis(80));
                input_provider.inject(PIN_BUTTON, DigitalState::Low);
            }
        })
    };

    while presses.load(Ordering::SeqCst) < TARGET_PRESSES {
        if led.state()?.is_high() {
            println!("LED low");
            led.set_low()?;
        } else {
            println!("LED high");
            led.set_high()?;
        }
        let count = presses.load(Ordering::SeqCst) as u64;
        thread::sleep(Duration::from_millis(500 / (count + 1)));
    }

    stop.store(true, Ordering::Release);
    let _ = source.join();

    context.shutdown();
    info!("Done after {TARGET_PRESSES} presses");
    Ok(())
}
