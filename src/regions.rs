use std::collections::HashMap;

/// JMA forecast office codes, one per prefecture. Hokkaido has several
/// offices; we use the Ishikari office, which covers Sapporo. Kagoshima and
/// Okinawa do not follow the NN0000 pattern.
const PREFECTURES: [(&str, &str); 47] = [
    ("016000", "北海道"),
    ("020000", "青森県"),
    ("030000", "岩手県"),
    ("040000", "宮城県"),
    ("050000", "秋田県"),
    ("060000", "山形県"),
    ("070000", "福島県"),
    ("080000", "茨城県"),
    ("090000", "栃木県"),
    ("100000", "群馬県"),
    ("110000", "埼玉県"),
    ("120000", "千葉県"),
    ("130000", "東京都"),
    ("140000", "神奈川県"),
    ("150000", "新潟県"),
    ("160000", "富山県"),
    ("170000", "石川県"),
    ("180000", "福井県"),
    ("190000", "山梨県"),
    ("200000", "長野県"),
    ("210000", "岐阜県"),
    ("220000", "静岡県"),
    ("230000", "愛知県"),
    ("240000", "三重県"),
    ("250000", "滋賀県"),
    ("260000", "京都府"),
    ("270000", "大阪府"),
    ("280000", "兵庫県"),
    ("290000", "奈良県"),
    ("300000", "和歌山県"),
    ("310000", "鳥取県"),
    ("320000", "島根県"),
    ("330000", "岡山県"),
    ("340000", "広島県"),
    ("350000", "山口県"),
    ("360000", "徳島県"),
    ("370000", "香川県"),
    ("380000", "愛媛県"),
    ("390000", "高知県"),
    ("400000", "福岡県"),
    ("410000", "佐賀県"),
    ("420000", "長崎県"),
    ("430000", "熊本県"),
    ("440000", "大分県"),
    ("450000", "宮崎県"),
    ("460100", "鹿児島県"),
    ("471000", "沖縄県"),
];

/// Immutable code -> name table, built once at startup and shared by
/// reference. A miss is an ordinary value, not an error.
pub struct RegionDirectory(HashMap<&'static str, &'static str>);

impl RegionDirectory {
    pub fn new() -> Self {
        RegionDirectory(PREFECTURES.into_iter().collect())
    }

    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.0.get(code).copied()
    }
}

impl Default for RegionDirectory {
    fn default() -> Self {
        RegionDirectory::new()
    }
}
