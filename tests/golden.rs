use xbarmenu::{demos, icon, Icon, MenuItem, Plugin, Style};

fn render(plugin: &Plugin) -> String {
    let mut out = Vec::new();
    plugin.render(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn lines(text: &str) -> String {
    text.lines().map(|l| format!("{l}\n")).collect()
}

#[test]
fn submenus() {
    assert_eq!(
        render(&demos::submenus()),
        lines(
            "Submenu| refresh=false trim=false
---
Places| refresh=false trim=false
--London| refresh=false trim=false
--Paris| refresh=false trim=false
--Tokyo| refresh=false trim=false
---
Fruit| refresh=false trim=false
--Apple| refresh=false trim=false
--Orange| refresh=false trim=false
--Melon| refresh=false trim=false
----Watermelon| refresh=false trim=false
----Honeydew| refresh=false trim=false"
        )
    );
}

#[test]
fn two_city_submenu() {
    let plugin = Plugin::new().with_text("Submenu").with_elements([MenuItem::new("Places")
        .with_sub_menu([MenuItem::new("London"), MenuItem::new("Paris")])]);
    assert_eq!(
        render(&plugin),
        lines(
            "Submenu| refresh=false trim=false
---
Places| refresh=false trim=false
--London| refresh=false trim=false
--Paris| refresh=false trim=false"
        )
    );
}

#[test]
fn alternate_options() {
    assert_eq!(
        render(&demos::alternate_options()),
        lines(
            "Alternate Options| refresh=false trim=false
---
Hello| refresh=false trim=false
Option key is pressed| refresh=false trim=false alternate=true
Another| refresh=false trim=false"
        )
    );
}

#[test]
fn run_shell() {
    assert_eq!(
        render(&demos::run_shell("/tmp/xbarmenu_test")),
        lines(
            r#"🐌| refresh=false trim=false
---
🗣️ Say Hello| terminal=false shell="say" param1='hello' param2='world' refresh=false trim=false
🗣️ Say Goodbye| terminal=false shell="say" param1='goodbye' param2='world' refresh=false trim=false alternate=true
---
🔋 Battery Preferences| key=shift+b terminal=false shell="open" param1='-b' param2='com.apple.systempreferences' param3='/System/Library/PreferencePanes/Battery.prefPane' refresh=false trim=false
---
🏠 Home Directory| refresh=false trim=false
--View Tree| terminal=true shell="tree" param1='-d' param2='-L' param3='1' param4='/tmp/xbarmenu_test' refresh=false trim=false
--Copy Path| key=CmdOrCtrl+c terminal=false shell="/bin/bash" param1='-c' param2='echo -n /tmp/xbarmenu_test | pbcopy' refresh=false trim=false
---
ℹ️ Send Notification| key=ctrl+OptionOrAlt+n terminal=false shell="osascript" param1='-e' param2='display notification "This is a notification" with title "Example" subtitle "Thanks for clicking!"' refresh=false trim=false"#
        )
    );
}

#[test]
fn hello_world_icons_are_inline_png() {
    let out = render(&demos::hello_world("hi", "sam"));
    let mut it = out.lines();
    assert_eq!(it.next(), Some("👋🌎| refresh=false trim=false"));
    assert_eq!(it.next(), Some("---"));
    assert_eq!(
        it.next(),
        Some("Greet| key=CmdOrCtrl+G terminal=false shell=\"say\" param1='hi' param2='sam' refresh=false trim=false")
    );
    assert_eq!(it.next(), Some("---"));
    assert_eq!(it.next(), Some("Statuses| refresh=false trim=false"));

    let available = icon::STATUS_AVAILABLE.load().unwrap();
    assert_eq!(
        it.next(),
        Some(
            format!(
                "--Available| image={} refresh=false trim=false",
                icon::encode(&available)
            )
            .as_str()
        )
    );
    assert_eq!(it.filter(|l| l.starts_with("--")).count(), 3);
}

#[test]
fn images_and_links_uses_a_template_title_icon() {
    let out = render(&demos::images_and_links());
    let title = out.lines().next().unwrap();
    assert!(title.starts_with("| templateImage="), "{title}");
    assert!(out.ends_with(
        "View Source| href=https://github.com/matryer/xbar-plugins refresh=false trim=false\n"
    ));
}

#[test]
fn file_icon_is_read_at_render_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dot.png");
    std::fs::write(&path, b"fo").unwrap();

    let plugin = Plugin::new().with_elements([MenuItem::new("Dot")
        .with_icon(Icon::from_file(&path))
        .with_style(Style::default().with_color("red"))]);
    assert_eq!(
        render(&plugin),
        lines(
            "| refresh=false trim=false
---
Dot| color=red image=Zm8= refresh=false trim=false"
        )
    );

    std::fs::remove_file(&path).unwrap();
    let mut out = Vec::new();
    let err = plugin.render(&mut out).unwrap_err();
    assert!(matches!(err, xbarmenu::RenderError::Icon { .. }));
    // The title line was already written before the failure.
    assert_eq!(String::from_utf8(out).unwrap(), "| refresh=false trim=false\n---\n");
}

#[test]
fn document_renders_like_the_builder() {
    let doc = xbarmenu::document::PluginDocument::from_json(
        r#"{
            "title": "Alternate Options",
            "items": [
                { "title": "Hello", "alt": { "title": "Option key is pressed" } },
                { "title": "Another" }
            ]
        }"#,
    )
    .unwrap();
    let plugin = doc.into_plugin(None).unwrap();
    assert_eq!(plugin, demos::alternate_options());
    assert_eq!(render(&plugin), render(&demos::alternate_options()));
}
