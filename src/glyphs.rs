/// Built-in folder badges, keyed by lowercase directory name.
///
/// Order is irrelevant; keys are unique.
pub const DEFAULT_GLYPHS: &[(&str, &str)] = &[
    ("src", "📦📦"),
    ("source", "📦"),
    ("assets", "🎨"),
    ("images", "🖼️"),
    ("img", "🖼️"),
    ("docs", "📜"),
    ("documentation", "📄"),
    ("test", "🧪"),
    ("tests", "🧪"),
    ("config", "⚙️"),
    ("configuration", "⚙️"),
    ("dist", "📤"),
    ("build", "🔨"),
    ("lib", "📚"),
    ("libs", "📚"),
    ("scripts", "📜"),
    ("styles", "💅"),
    ("css", "💅"),
    ("components", "🧩"),
    ("utils", "🛠️"),
    ("helpers", "🔧"),
    ("node_modules", "📦"),
    ("public", "🌐"),
    ("static", "📄"),
    ("data", "📊"),
    ("api", "🔌"),
    ("models", "🏗️"),
    ("controllers", "🎮"),
    ("views", "👁️"),
    ("pages", "📃"),
    ("fonts", "🔤"),
    ("audio", "🔊"),
    ("video", "🎬"),
    ("logs", "📝"),
    ("translations", "🌍"),
    ("locales", "🌐"),
    ("i18n", "🌎"),
    ("temp", "🕒"),
    ("tmp", "🕒"),
];
