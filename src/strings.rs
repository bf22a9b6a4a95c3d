//! Compiled-in display strings for every supported locale.

use crate::locale::Locale;

/// All translation pairs for `locale`.
#[must_use]
pub fn entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Zh => ZH,
        Locale::En => EN,
        Locale::Ja => JA,
    }
}

/// Every translation key used by the page markup.
pub const KEYS: [&str; 30] = [
    "hero.subtitle",
    "features.title",
    "features.subtitle",
    "feature.accept.title",
    "feature.accept.desc",
    "feature.history.title",
    "feature.history.desc",
    "feature.friends.title",
    "feature.friends.desc",
    "feature.opgg.title",
    "feature.opgg.desc",
    "feature.counter.title",
    "feature.counter.desc",
    "feature.ai.title",
    "feature.ai.desc",
    "feature.auto.title",
    "feature.auto.desc",
    "feature.overlay.title",
    "feature.overlay.desc",
    "feature.mobile.title",
    "feature.mobile.desc",
    "showcase.app.title",
    "showcase.app.subtitle",
    "showcase.opgg.title",
    "showcase.opgg.subtitle",
    "showcase.mobile.title",
    "showcase.mobile.subtitle",
    "tech.title",
    "tech.subtitle",
    "footer.tribute",
];

const ZH: &[(&str, &str)] = &[
    ("hero.subtitle", "一款使用 Tauri 开发的支持双端操作的英雄联盟客户端，简洁，高效"),
    ("features.title", "Features"),
    ("features.subtitle", "从选人阶段到对局结束，全流程智能辅助"),
    ("feature.accept.title", "自动接受对局"),
    ("feature.accept.desc", "匹配成功后自动接受对局，无需手动操作，再也不会错过匹配"),
    ("feature.history.title", "战绩查询"),
    ("feature.history.desc", "查看详细对局历史记录，包括KDA、伤害数据和装备详情"),
    ("feature.friends.title", "好友交互"),
    ("feature.friends.desc", "聊天、邀请好友组队、预约邀请，社交功能一应俱全"),
    ("feature.opgg.title", "OP.GG 集成"),
    (
        "feature.opgg.desc",
        "自动应用版本强势出装、符文和召唤师技能，支持排位、大乱斗、斗魂竞技场等多模式",
    ),
    ("feature.counter.title", "Counter 对位分析"),
    ("feature.counter.desc", "自动计算选中英雄的克制与被克制关系，经典模式下展示对位推荐"),
    ("feature.ai.title", "AI 智能分析"),
    ("feature.ai.desc", "AI 实时局势分析与出装推荐，对局结束后提供复盘评价与改进建议"),
    ("feature.auto.title", "自动应用"),
    ("feature.auto.desc", "选人阶段自动应用符文、召唤师技能和装备集，告别手动配置"),
    ("feature.overlay.title", "游戏内悬浮窗"),
    (
        "feature.overlay.desc",
        "透明无边框悬浮窗覆盖在游戏画面上，快捷键一键切换，不影响游戏操作",
    ),
    ("feature.mobile.title", "移动端支持"),
    ("feature.mobile.desc", "局域网数据共享，手机扫码即可操控选人、查看出装和海克斯推荐"),
    ("showcase.app.title", "主程序"),
    ("showcase.app.subtitle", "启动英雄联盟客户端后，使用 Futaba 接管所有其他功能"),
    ("showcase.opgg.title", "OP.GG 集成"),
    (
        "showcase.opgg.subtitle",
        "自动应用版本强势装备与符文，经典模式展示 Counter 对位推荐，大乱斗展示海克斯强化",
    ),
    ("showcase.mobile.title", "移动端"),
    (
        "showcase.mobile.subtitle",
        "局域网内扫码访问，接受对局、抢英雄、查出装，拿外卖上厕所也不耽误",
    ),
    ("tech.title", "Tech Stack"),
    ("tech.subtitle", "现代技术栈，原生性能"),
    ("footer.tribute", "Inspired by Persona 5 — \"Take Your Heart\""),
];

const EN: &[(&str, &str)] = &[
    (
        "hero.subtitle",
        "A dual-platform League of Legends client built with Tauri — simple and efficient",
    ),
    ("features.title", "Features"),
    ("features.subtitle", "Intelligent assistance from champion select to post-game"),
    ("feature.accept.title", "Auto Accept"),
    (
        "feature.accept.desc",
        "Automatically accept matches when a game is found — never miss a queue pop again",
    ),
    ("feature.history.title", "Match History"),
    (
        "feature.history.desc",
        "Browse detailed match history including KDA, damage stats, and item builds",
    ),
    ("feature.friends.title", "Friends & Social"),
    (
        "feature.friends.desc",
        "Chat, invite friends to party, schedule invites — all social features in one place",
    ),
    ("feature.opgg.title", "OP.GG Integration"),
    (
        "feature.opgg.desc",
        "Auto-apply meta builds, runes, and summoner spells across Ranked, ARAM, Arena, and more",
    ),
    ("feature.counter.title", "Counter Analysis"),
    (
        "feature.counter.desc",
        "Automatically calculate counter and favorable matchups for your selected champion",
    ),
    ("feature.ai.title", "AI Analysis"),
    (
        "feature.ai.desc",
        "Real-time AI situation analysis and build advice, plus post-game review with improvement tips",
    ),
    ("feature.auto.title", "Auto Apply"),
    (
        "feature.auto.desc",
        "Automatically apply runes, summoner spells, and item sets during champion select",
    ),
    ("feature.overlay.title", "In-Game Overlay"),
    (
        "feature.overlay.desc",
        "Transparent borderless overlay on top of the game, toggle with a hotkey without interrupting gameplay",
    ),
    ("feature.mobile.title", "Mobile Support"),
    (
        "feature.mobile.desc",
        "LAN data sharing — scan QR code on your phone to pick champions, view builds, and more",
    ),
    ("showcase.app.title", "Main App"),
    ("showcase.app.subtitle", "Launch the LoL client, then let Futaba handle everything else"),
    ("showcase.opgg.title", "OP.GG Integration"),
    (
        "showcase.opgg.subtitle",
        "Auto-apply meta builds and runes, show counter matchups in Classic mode, augments in ARAM",
    ),
    ("showcase.mobile.title", "Mobile"),
    (
        "showcase.mobile.subtitle",
        "Scan to access on your local network — accept matches, pick champions, and check builds on the go",
    ),
    ("tech.title", "Tech Stack"),
    ("tech.subtitle", "Modern stack, native performance"),
    ("footer.tribute", "Inspired by Persona 5 — \"Take Your Heart\""),
];

const JA: &[(&str, &str)] = &[
    (
        "hero.subtitle",
        "Tauri で開発されたデュアルプラットフォーム対応の LoL クライアント — シンプルで高効率",
    ),
    ("features.title", "Features"),
    ("features.subtitle", "チャンピオン選択から試合終了まで、全行程をスマートにサポート"),
    ("feature.accept.title", "自動マッチ承認"),
    (
        "feature.accept.desc",
        "マッチング成功後に自動で対戦を承認。手動操作不要で、マッチを見逃しません",
    ),
    ("feature.history.title", "戦績検索"),
    ("feature.history.desc", "KDA、ダメージデータ、アイテム詳細を含む詳細な試合履歴を閲覧"),
    ("feature.friends.title", "フレンド機能"),
    ("feature.friends.desc", "チャット、フレンド招待、予約招待など、ソーシャル機能が充実"),
    ("feature.opgg.title", "OP.GG 連携"),
    (
        "feature.opgg.desc",
        "メタビルド・ルーン・サモナースペルを自動適用。ランク・ARAM・アリーナなど複数モードに対応",
    ),
    ("feature.counter.title", "カウンター分析"),
    ("feature.counter.desc", "選択チャンピオンのカウンターと有利マッチアップを自動計算"),
    ("feature.ai.title", "AI 分析"),
    (
        "feature.ai.desc",
        "AIによるリアルタイム局勢分析とビルド提案、試合後の振り返りと改善アドバイス",
    ),
    ("feature.auto.title", "自動適用"),
    (
        "feature.auto.desc",
        "チャンピオン選択時にルーン・サモナースペル・アイテムセットを自動適用",
    ),
    ("feature.overlay.title", "ゲーム内オーバーレイ"),
    (
        "feature.overlay.desc",
        "透明なボーダーレスオーバーレイをゲーム画面上に表示。ホットキーで切り替え、操作を妨げません",
    ),
    ("feature.mobile.title", "モバイル対応"),
    (
        "feature.mobile.desc",
        "LAN共有でスマホからQRスキャン。チャンピオン選択・ビルド確認・ヘクステック推薦をモバイルで",
    ),
    ("showcase.app.title", "メインアプリ"),
    ("showcase.app.subtitle", "LoLクライアント起動後、Futabaがすべての機能を引き継ぎます"),
    ("showcase.opgg.title", "OP.GG 連携"),
    (
        "showcase.opgg.subtitle",
        "メタビルドとルーンを自動適用、クラシックモードでカウンター表示、ARAMでオーグメント表示",
    ),
    ("showcase.mobile.title", "モバイル"),
    (
        "showcase.mobile.subtitle",
        "LAN内でQRスキャン。対戦承認・チャンピオン選択・ビルド確認を外出先でも",
    ),
    ("tech.title", "Tech Stack"),
    ("tech.subtitle", "モダンな技術スタック、ネイティブパフォーマンス"),
    ("footer.tribute", "Inspired by Persona 5 — \"Take Your Heart\""),
];
