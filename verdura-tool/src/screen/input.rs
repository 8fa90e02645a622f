use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{CatalogScreen, Phase};

pub fn handle_event(screen: &mut CatalogScreen, event: Event) {
    if let Event::Key(key) = event {
        handle_key(screen, key);
    }
}

fn handle_key(screen: &mut CatalogScreen, key: KeyEvent) {
    match screen.phase {
        Phase::Loading => handle_loading_key(screen, key),
        _ => handle_browse_key(screen, key),
    }
}

fn handle_browse_key(screen: &mut CatalogScreen, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            screen.should_quit = true;
        }
        (KeyCode::Up, _) => {
            screen.select_up();
        }
        (KeyCode::Down, _) => {
            screen.select_down();
        }
        (KeyCode::Backspace, _) => {
            screen.search_backspace();
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            screen.search_char(c);
        }
        _ => {}
    }
}

fn handle_loading_key(screen: &mut CatalogScreen, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        screen.cancel_fetch();
    }
}
