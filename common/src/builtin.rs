//! 組み込みキーワード表
//!
//! 画像認識サービスが返す英語ラベルと、利用者が入力するスペイン語の語を
//! 3分類に対応付ける。優先度は 4（特定）> 3 > 2 > 1（汎用）。

use crate::types::Category::{self, NonRecyclable, Organic, Recyclable};

/// (キーワード, 分類, 優先度)
pub const BUILTIN_RULES: &[(&str, Category, u8)] = &[
    // 非リサイクル: 軽量包装・汚れた紙・発泡材など
    ("chip bag", NonRecyclable, 4),
    ("snack bag", NonRecyclable, 4),
    ("candy wrapper", NonRecyclable, 4),
    ("food packaging", NonRecyclable, 4),
    ("flexible packaging", NonRecyclable, 4),
    ("potato chip", NonRecyclable, 4),
    ("chips", NonRecyclable, 3),
    ("snack", NonRecyclable, 3),
    ("papas", NonRecyclable, 3),
    ("papitas", NonRecyclable, 3),
    ("mecato", NonRecyclable, 4),
    ("chito", NonRecyclable, 4),
    ("corn snack", NonRecyclable, 4),
    ("pop corn", NonRecyclable, 4),
    ("popcorn", NonRecyclable, 4),
    ("crisp", NonRecyclable, 3),
    ("junk food", NonRecyclable, 4),
    ("fast food", NonRecyclable, 4),
    ("finger food", NonRecyclable, 4),
    ("convenience food", NonRecyclable, 4),
    ("comfort food", NonRecyclable, 3),
    ("processed food", NonRecyclable, 3),
    ("packaged food", NonRecyclable, 4),
    ("packaging and labeling", NonRecyclable, 3),
    ("napkin", NonRecyclable, 3),
    ("tissue", NonRecyclable, 3),
    ("paper towel", NonRecyclable, 3),
    ("servilleta", NonRecyclable, 3),
    ("papel higiénico", NonRecyclable, 3),
    ("toilet paper", NonRecyclable, 3),
    ("used paper", NonRecyclable, 3),
    ("dirty paper", NonRecyclable, 3),
    ("styrofoam", NonRecyclable, 2),
    ("polystyrene", NonRecyclable, 2),
    ("foam", NonRecyclable, 2),
    ("icopor", NonRecyclable, 2),
    ("wrapper", NonRecyclable, 2),
    ("plastic bag", NonRecyclable, 2),
    ("shopping bag", NonRecyclable, 2),
    ("film", NonRecyclable, 2),
    ("envoltorio", NonRecyclable, 2),
    ("straw", NonRecyclable, 2),
    ("cigarette", NonRecyclable, 2),
    ("diaper", NonRecyclable, 2),
    ("dirty", NonRecyclable, 2),
    ("contaminated", NonRecyclable, 2),
    ("pitillo", NonRecyclable, 2),
    ("pañal", NonRecyclable, 2),
    ("trash", NonRecyclable, 1),
    ("waste", NonRecyclable, 1),
    ("garbage", NonRecyclable, 1),
    ("rubbish", NonRecyclable, 1),
    ("basura", NonRecyclable, 1),

    // リサイクル: 容器・金属・ガラス・清潔な紙
    ("plastic bottle", Recyclable, 3),
    ("water bottle", Recyclable, 3),
    ("soda bottle", Recyclable, 3),
    ("glass bottle", Recyclable, 3),
    ("aluminum can", Recyclable, 3),
    ("tin can", Recyclable, 3),
    ("beverage can", Recyclable, 3),
    ("lata de aluminio", Recyclable, 3),
    ("cardboard", Recyclable, 2),
    ("newspaper", Recyclable, 2),
    ("magazine", Recyclable, 2),
    ("carton", Recyclable, 2),
    ("box", Recyclable, 2),
    ("cartón", Recyclable, 2),
    ("caja", Recyclable, 2),
    ("bottle", Recyclable, 2),
    ("container", Recyclable, 2),
    ("jar", Recyclable, 2),
    ("jug", Recyclable, 2),
    ("botella", Recyclable, 2),
    ("envase", Recyclable, 2),
    ("recipiente", Recyclable, 2),
    ("can", Recyclable, 2),
    ("metal", Recyclable, 2),
    ("aluminum", Recyclable, 2),
    ("aluminium", Recyclable, 2),
    ("tin", Recyclable, 2),
    ("steel", Recyclable, 2),
    ("lata", Recyclable, 2),
    ("aluminio", Recyclable, 2),
    ("glass", Recyclable, 2),
    ("vidrio", Recyclable, 2),
    ("tetrapack", Recyclable, 2),
    ("tetrapak", Recyclable, 2),
    ("tetrabrik", Recyclable, 2),
    ("grocery bag", Recyclable, 2),
    ("tote bag", Recyclable, 2),
    ("reusable bag", Recyclable, 2),
    ("plastic", Recyclable, 1),
    ("pet", Recyclable, 1),
    ("hdpe", Recyclable, 1),
    ("polyethylene", Recyclable, 1),
    ("polypropylene", Recyclable, 1),
    ("plástico", Recyclable, 1),
    ("paper", Recyclable, 1),
    ("papel", Recyclable, 1),
    ("packaging", Recyclable, 1),
    ("empaque", Recyclable, 1),
    ("recyclable", Recyclable, 1),
    ("reciclable", Recyclable, 1),
    ("bag", Recyclable, 1),
    ("bolsa", Recyclable, 1),

    // 有機: 食品・植物
    ("fruit", Organic, 2),
    ("vegetable", Organic, 2),
    ("banana", Organic, 2),
    ("apple", Organic, 2),
    ("orange", Organic, 2),
    ("peel", Organic, 2),
    ("cáscara", Organic, 2),
    ("fruta", Organic, 2),
    ("verdura", Organic, 2),
    ("plant", Organic, 2),
    ("leaf", Organic, 2),
    ("flower", Organic, 2),
    ("grass", Organic, 2),
    ("tree", Organic, 2),
    ("branch", Organic, 2),
    ("bread", Organic, 2),
    ("meat", Organic, 2),
    ("fish", Organic, 2),
    ("egg", Organic, 2),
    ("coffee", Organic, 2),
    ("tea", Organic, 2),
    ("rice", Organic, 2),
    ("pasta", Organic, 2),
    ("cheese", Organic, 2),
    ("leftover", Organic, 2),
    ("sobras", Organic, 2),
    ("food", Organic, 1),
    ("compost", Organic, 1),
    ("organic", Organic, 1),
    ("biodegradable", Organic, 1),
    ("comida", Organic, 1),
];
