//! Walkthrough of a full menu session without a renderer attached.
//! Builds a contact-support menu, presents it, opens a group, taps an item,
//! and dismisses, logging the emitted draw list at each step.
//!
//! Usage: RUST_LOG=info cargo run --bin demo

use std::time::{Duration, Instant};

use platter::draw::DrawList;
use platter::{Anchor, Icon, MenuController, MenuGroup, MenuItem, Viewport};

fn report(menu: &MenuController, now: Instant, label: &str) {
    let mut dl = DrawList::new();
    menu.draw(&mut dl, now);
    log::info!(
        "{}: phase {:?}, {} rows, {} panels / {} texts / {} icons",
        label,
        menu.phase(),
        menu.rows().len(),
        dl.panels.len(),
        dl.texts.len(),
        dl.icons.len(),
    );
}

fn main() {
    env_logger::init();

    let mut menu = MenuController::new("Contact Support", Anchor::Bottom);

    menu.add_action(
        MenuItem::new("Open web page")
            .with_icon(Icon::new("icon-home"))
            .on_select(|menu, item| {
                log::info!("selected '{}'", item.title());
                menu.dismiss(true, Instant::now(), None);
            }),
    );

    let tech = menu.add_action(
        MenuGroup::new(
            "Contact tech. support",
            vec![
                MenuItem::new("tech.support@example.com").with_icon(Icon::new("icon-email")),
                MenuItem::new("1-866-752-7753").with_icon(Icon::new("icon-call")),
            ],
        )
        .with_icon(Icon::new("icon-group")),
    );

    menu.add_action(MenuGroup::new(
        "Contact customers support",
        vec![
            MenuItem::new("customers@example.com").with_icon(Icon::new("icon-email")),
            MenuItem::new("1-800-676-2775").with_icon(Icon::new("icon-call")),
        ],
    ));

    let viewport = Viewport::new(414.0, 896.0);
    let step = Duration::from_millis(100);
    let mut now = Instant::now();

    menu.display(viewport, true, now, Some(Box::new(|| {
        log::info!("entrance animation settled");
    })));
    report(&menu, now, "after display");

    // Mid-entrance frame.
    now += step;
    menu.tick(now);
    report(&menu, now, "mid-entrance");

    // Entrance settles at 200 ms.
    now += step;
    menu.tick(now);
    report(&menu, now, "presented");

    // Open the tech support group.
    menu.toggle_group(tech, now);
    now += 2 * step;
    menu.tick(now);
    report(&menu, now, "group open");

    // Tap the first child row (row 2: item, group header, child...).
    if let Some(frame) = menu.frame(now) {
        let x = frame.rect.x + frame.rect.width / 2.0;
        let y = frame.rect.y + 2.0 * menu.theme().row_height + 1.0;
        menu.pointer_pressed(x, y, now);
        menu.pointer_released(x, y, now);
    }
    report(&menu, now, "child tapped");

    // Cancel whatever is left.
    menu.press_cancel(now);
    now += 2 * step;
    menu.tick(now);
    report(&menu, now, "dismissed");
}
