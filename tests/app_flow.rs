use cartview::config::Config;
use cartview::share::decode_link;
use cartview::ui::app::App;

fn make_app() -> App {
    App::new(Config::default())
}

#[test]
fn app_starts_with_seed_cart() {
    let app = make_app();
    let screen = app.screen();
    assert_eq!(screen.cart.len(), 1);
    assert_eq!(screen.cart.total(), 309);
    assert_eq!(screen.cart.restaurant_name(), Some("The Red Box"));
}

#[test]
fn quantity_keys_drive_the_focused_item() {
    let mut app = make_app();
    app.change_focused_quantity(1);
    assert_eq!(app.screen().cart.total(), 618);
    app.change_focused_quantity(-1);
    app.change_focused_quantity(-1);
    assert_eq!(app.screen().cart.total(), 0);
    assert_eq!(app.screen().cart.len(), 1);
}

#[test]
fn generate_opens_share_surface_with_decodable_link() {
    let mut app = make_app();
    app.generate_share_link();
    let link = app.screen().share_link.clone().expect("share surface open");
    assert!(link.starts_with("https://food.example.com/share/"));
    assert_eq!(decode_link(&link).unwrap(), app.screen().cart);
}

#[test]
fn link_reflects_quantity_at_generation_time() {
    let mut app = make_app();
    app.change_focused_quantity(1);
    app.generate_share_link();
    let link = app.screen().share_link.clone().unwrap();
    let decoded = decode_link(&link).unwrap();
    assert_eq!(decoded.items()[0].quantity, 2);
}

#[test]
fn copy_clears_the_transient_link() {
    let mut app = make_app();
    app.generate_share_link();
    assert!(app.screen().share_open());
    app.copy_share_link();
    assert!(!app.screen().share_open());
    assert_eq!(app.screen().share_link, None);
}

#[test]
fn copy_without_open_surface_is_noop() {
    let mut app = make_app();
    app.copy_share_link();
    assert!(!app.screen().share_open());
}

#[test]
fn dismiss_clears_without_copying() {
    let mut app = make_app();
    app.generate_share_link();
    app.dismiss_share();
    assert!(!app.screen().share_open());
}

#[test]
fn quit_flag_starts_false_and_latches() {
    let mut app = make_app();
    assert!(!app.should_quit());
    app.request_quit();
    assert!(app.should_quit());
}
