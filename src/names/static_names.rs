//! Built-in code→name table for stocks whose disclosures omit the name.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Static fallback table used when a disclosure carries no usable
    /// embedded name.
    pub static ref STOCK_NAME_TABLE: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("1210", "大立光");
        m.insert("1303", "南亞");
        m.insert("1319", "東陽");
        m.insert("1326", "磨石");
        m.insert("1476", "儒鴻");
        m.insert("1560", "中砂");
        m.insert("2024", "鴨肉王");
        m.insert("2027", "大成鋼");
        m.insert("2308", "台達電");
        m.insert("2317", "鴻海");
        m.insert("2330", "台積電");
        m.insert("2344", "華邦電");
        m.insert("2345", "智邦");
        m.insert("2354", "鴻準");
        m.insert("2357", "華碩");
        m.insert("2368", "金像電");
        m.insert("2383", "台光電");
        m.insert("2449", "京元電");
        m.insert("2454", "聯發科");
        m.insert("2618", "長榮");
        m.insert("2808", "豐祥");
        m.insert("2884", "玉山金");
        m.insert("3017", "奇鋐");
        m.insert("3034", "聯詠");
        m.insert("3037", "欣興");
        m.insert("3264", "欣銓");
        m.insert("3293", "鈺漲");
        m.insert("3376", "新日興");
        m.insert("3529", "新美亞");
        m.insert("3583", "辛耘");
        m.insert("3665", "貿聯");
        m.insert("3711", "日月光");
        m.insert("5347", "世界");
        m.insert("5434", "崇義");
        m.insert("6121", "新巨");
        m.insert("6223", "旺矽");
        m.insert("6257", "宏科");
        m.insert("6274", "台燿");
        m.insert("6515", "力晶");
        m.insert("6669", "緯穎");
        m.insert("6670", "宏達");
        m.insert("8046", "南電");
        m.insert("8069", "瑞銀");
        m.insert("8114", "振樺");
        m
    };
}

/// The built-in table as an owned map, for injecting into a resolver.
pub fn default_name_table() -> HashMap<String, String> {
    STOCK_NAME_TABLE
        .iter()
        .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
        .collect()
}
