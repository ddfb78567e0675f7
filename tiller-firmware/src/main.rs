//! Tiller demo firmware
//!
//! Menu navigation demo for RP2040 boards with a 128x64 SSD1306 OLED
//! on I2C and three push buttons (up / down / click). Buttons feed
//! navigation events into a channel; a single task owns the controller
//! and applies them, so every command is serialized.

#![no_std]
#![no_main]

mod buttons;
mod ssd1306;

use core::fmt::Write as _;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicBool, Ordering};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tiller_core::traits::display::DisplayBackend;
use tiller_core::{ClickOutcome, Controller, Error, HandlerError, Item, NavigationEvent, View};

use crate::buttons::Button;
use crate::ssd1306::Ssd1306;

/// Channel capacity for navigation events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Navigation events from the buttons to the UI task
static EVENTS: Channel<CriticalSectionRawMutex, NavigationEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Demo setting toggled from the settings menu
static SOUND_ENABLED: AtomicBool = AtomicBool::new(true);

static ABOUT_VIEW: StaticCell<AboutView> = StaticCell::new();

type Display = Ssd1306<I2c<'static, I2C1, i2c::Blocking>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tiller demo firmware starting...");

    let p = embassy_rp::init(Default::default());

    // I2C1 on GP2 (SDA) / GP3 (SCL)
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c::Config::default());

    let mut display = Ssd1306::new(i2c);
    match display.init() {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }

    let mut ui = Controller::new(display);
    if let Err(e) = build_menus(&mut ui) {
        error!("Menu wiring failed: {:?}", e);
    }

    // Buttons on GP10 (up), GP11 (down), GP12 (click), active low
    spawner
        .spawn(button_task(
            Input::new(p.PIN_10, Pull::Up),
            NavigationEvent::Up,
        ))
        .unwrap();
    spawner
        .spawn(button_task(
            Input::new(p.PIN_11, Pull::Up),
            NavigationEvent::Down,
        ))
        .unwrap();
    spawner
        .spawn(button_task(
            Input::new(p.PIN_12, Pull::Up),
            NavigationEvent::Click,
        ))
        .unwrap();
    spawner.spawn(ui_task(ui)).unwrap();

    info!("All tasks spawned");
}

/// Wire up the demo menu tree and show the entry screen
fn build_menus(ui: &mut Controller<Display>) -> Result<(), Error> {
    ui.bind_action("status", report_status)?;
    ui.bind_action("toggle-sound", toggle_sound)?;

    ui.add_menu(
        "main",
        &[
            Item::action("Status", "status"),
            Item::link("Demo list", "demo"),
            Item::link("Settings", "settings"),
            Item::link("About", "about"),
        ],
        Some("Tiller"),
        None,
    )?;

    ui.add_menu(
        "settings",
        &[
            Item::action("Toggle sound", "toggle-sound"),
            Item::leaf("Brightness"),
            Item::leaf("Timeout"),
        ],
        Some("Settings"),
        Some("main"),
    )?;

    // Numbered list long enough to page and wrap
    let mut demo_items: heapless::Vec<Item, 11> = heapless::Vec::new();
    for i in 1..=11u8 {
        let mut label: heapless::String<21> = heapless::String::new();
        let _ = write!(label, "Test {}", i);
        let _ = demo_items.push(Item::leaf(&label));
    }
    ui.add_menu("demo", &demo_items, None, Some("main"))?;
    if let Some(menu) = ui.menu_mut("demo") {
        menu.set_next_page_hint("...");
    }

    ui.add_view("about", ABOUT_VIEW.init(AboutView))?;

    ui.show("main")
}

/// Info screen registered as a custom view; any click leads back
struct AboutView;

impl View for AboutView {
    fn show(&mut self, display: &mut dyn DisplayBackend) -> Result<(), Error> {
        display.clear()?;
        display.draw_text(1, 1, "Tiller 0.1.0", false)?;
        display.draw_text(1, 21, "Menu engine demo", false)?;
        display.draw_text(1, 51, "click = back", false)?;
        display.flush()?;
        Ok(())
    }

    fn up(&mut self, _display: &mut dyn DisplayBackend) -> Result<(), Error> {
        Ok(())
    }

    fn down(&mut self, _display: &mut dyn DisplayBackend) -> Result<(), Error> {
        Ok(())
    }

    fn click(&mut self, _display: &mut dyn DisplayBackend) -> Result<ClickOutcome, Error> {
        Ok(ClickOutcome::Navigate("main"))
    }
}

fn report_status() -> Result<(), HandlerError> {
    info!(
        "status: sound enabled = {}",
        SOUND_ENABLED.load(Ordering::Relaxed)
    );
    Ok(())
}

fn toggle_sound() -> Result<(), HandlerError> {
    let enabled = !SOUND_ENABLED.load(Ordering::Relaxed);
    SOUND_ENABLED.store(enabled, Ordering::Relaxed);
    info!("sound enabled = {}", enabled);
    Ok(())
}

/// Button press task, one instance per button
#[embassy_executor::task(pool_size = 3)]
async fn button_task(input: Input<'static>, event: NavigationEvent) {
    let mut button = Button::new(input, event);

    loop {
        let event = button.wait_pressed().await;
        EVENTS.send(event).await;
    }
}

/// UI task - owns the controller and applies navigation events
#[embassy_executor::task]
async fn ui_task(mut ui: Controller<Display>) {
    info!("UI task started");

    loop {
        let event = EVENTS.receive().await;
        if let Err(e) = ui.handle_event(event) {
            warn!("Navigation error: {:?}", e);
        }
    }
}
