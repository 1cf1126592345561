//! Simplified-character screening for catalog Chinese text.
//!
//! Catalog descriptions are supposed to be written in traditional
//! characters; simplified forms slip in through copy-paste and OCR.
//! The table maps each simplified character that actually occurs in
//! numismatic copy to its traditional form. Characters identical in
//! both scripts are deliberately absent.

use serde::Serialize;

/// simplified → traditional, grouped by the vocabulary it comes from.
pub static SIMPLIFIED_TO_TRADITIONAL: &[(char, char)] = &[
    // Numerals, money and metals
    ('万', '萬'), ('亿', '億'), ('贰', '貳'), ('两', '兩'), ('陆', '陸'),
    ('币', '幣'), ('银', '銀'), ('钱', '錢'), ('贵', '貴'), ('宝', '寶'),
    ('财', '財'), ('货', '貨'), ('费', '費'), ('价', '價'), ('买', '買'),
    ('卖', '賣'), ('债', '債'), ('贷', '貸'), ('账', '賬'), ('储', '儲'),
    ('余', '餘'), ('额', '額'), ('资', '資'), ('税', '稅'), ('圆', '圓'),
    ('钢', '鋼'), ('铁', '鐵'), ('铜', '銅'), ('铝', '鋁'), ('锡', '錫'),
    ('铸', '鑄'),
    // Reign titles and dynastic vocabulary
    ('绪', '緒'), ('统', '統'), ('丰', '豐'), ('历', '歷'), ('纪', '紀'),
    ('权', '權'), ('户', '戶'), ('头', '頭'), ('险', '險'), ('担', '擔'),
    ('责', '責'),
    // Geography
    ('国', '國'), ('华', '華'), ('产', '產'), ('业', '業'), ('广', '廣'),
    ('湾', '灣'), ('岛', '島'), ('岭', '嶺'), ('东', '東'), ('内', '內'),
    ('区', '區'), ('县', '縣'),
    // Time
    ('时', '時'), ('间', '間'), ('周', '週'), ('钟', '鐘'),
    // Common catalog vocabulary
    ('开', '開'), ('关', '關'), ('门', '門'), ('车', '車'), ('电', '電'),
    ('话', '話'), ('发', '發'), ('证', '證'), ('书', '書'), ('单', '單'),
    ('据', '據'), ('条', '條'), ('项', '項'), ('录', '錄'), ('册', '冊'),
    ('设', '設'), ('办', '辦'), ('务', '務'), ('总', '總'), ('经', '經'),
    ('营', '營'), ('处', '處'), ('长', '長'), ('员', '員'), ('级', '級'),
    ('过', '過'), ('这', '這'), ('们', '們'), ('个', '個'), ('为', '為'),
    ('从', '從'), ('来', '來'), ('对', '對'), ('会', '會'), ('样', '樣'),
    ('种', '種'), ('现', '現'), ('实', '實'), ('让', '讓'), ('给', '給'),
    ('与', '與'), ('虽', '雖'), ('后', '後'), ('张', '張'), ('号', '號'),
    ('码', '碼'), ('页', '頁'), ('线', '線'), ('机', '機'), ('备', '備'),
    ('装', '裝'), ('网', '網'),
    // Institutions and ranks
    ('学', '學'), ('师', '師'), ('组', '組'), ('队', '隊'), ('团', '團'),
    ('规', '規'), ('则', '則'), ('审', '審'), ('译', '譯'), ('议', '議'),
    ('认', '認'), ('识', '識'), ('试', '試'), ('误', '誤'), ('访', '訪'),
    ('评', '評'), ('调', '調'), ('检', '檢'), ('验', '驗'), ('测', '測'),
    // Verbs
    ('说', '說'), ('讲', '講'), ('听', '聽'), ('读', '讀'), ('写', '寫'),
    ('记', '記'), ('忆', '憶'), ('虑', '慮'), ('决', '決'), ('选', '選'),
    ('择', '擇'), ('弃', '棄'), ('获', '獲'), ('护', '護'), ('报', '報'),
    ('制', '製'), ('复', '復'), ('显', '顯'), ('输', '輸'), ('构', '構'),
    ('运', '運'), ('递', '遞'), ('邮', '郵'), ('销', '銷'), ('贸', '貿'),
    ('订', '訂'), ('称', '稱'), ('唤', '喚'),
    // Descriptions
    ('爱', '愛'), ('欢', '歡'), ('乐', '樂'), ('忧', '憂'), ('满', '滿'),
    ('净', '淨'), ('旧', '舊'), ('轻', '輕'), ('宽', '寬'), ('浅', '淺'),
    ('远', '遠'), ('够', '夠'), ('紧', '緊'), ('松', '鬆'), ('坏', '壞'),
    ('丑', '醜'), ('强', '強'), ('软', '軟'), ('细', '細'),
    // Materials and objects
    ('纸', '紙'), ('丝', '絲'), ('绳', '繩'), ('带', '帶'), ('笔', '筆'),
    ('灯', '燈'),
    // Colors
    ('红', '紅'), ('绿', '綠'), ('蓝', '藍'), ('黄', '黃'),
    // Animals and plants (pictorial motifs on coinage)
    ('马', '馬'), ('鸟', '鳥'), ('鱼', '魚'), ('龟', '龜'), ('虫', '蟲'),
    ('狮', '獅'), ('猫', '貓'), ('猪', '豬'), ('树', '樹'), ('叶', '葉'),
    ('麦', '麥'), ('龙', '龍'), ('凤', '鳳'), ('鹤', '鶴'),
    // Buildings and scenery
    ('楼', '樓'), ('墙', '牆'), ('顶', '頂'), ('园', '園'), ('庙', '廟'),
    ('桥', '橋'), ('风', '風'), ('云', '雲'), ('热', '熱'), ('边', '邊'),
    ('飞', '飛'),
    // People
    ('儿', '兒'), ('孙', '孫'), ('爷', '爺'), ('众', '眾'), ('亲', '親'),
    ('农', '農'), ('医', '醫'),
    // Military
    ('军', '軍'), ('战', '戰'), ('斗', '鬥'), ('胜', '勝'), ('败', '敗'),
    ('敌', '敵'),
    // Arts and science
    ('声', '聲'), ('数', '數'), ('画', '畫'), ('戏', '戲'), ('剧', '劇'),
    ('诗', '詩'), ('词', '詞'), ('药', '藥'), ('伤', '傷'), ('疗', '療'),
    // Remaining high-frequency forms
    ('厂', '廠'), ('场', '場'), ('庆', '慶'), ('礼', '禮'), ('图', '圖'),
    ('状', '狀'), ('标', '標'), ('志', '誌'), ('类', '類'), ('质', '質'),
    ('计', '計'), ('积', '積'), ('并', '併'), ('联', '聯'), ('异', '異'),
    ('别', '別'), ('离', '離'), ('减', '減'), ('较', '較'), ('于', '於'),
    ('宾', '賓'), ('滨', '濱'), ('频', '頻'),
];

/// Traditional replacement for a simplified character, if it is one.
pub fn traditional_for(c: char) -> Option<char> {
    SIMPLIFIED_TO_TRADITIONAL
        .iter()
        .find(|&&(s, _)| s == c)
        .map(|&(_, t)| t)
}

/// Simplified characters present in `text`, with their traditional
/// replacements, in first-appearance order without duplicates.
pub fn find_simplified(text: &str) -> Vec<(char, char)> {
    let mut found: Vec<(char, char)> = Vec::new();
    for c in text.chars() {
        if let Some(t) = traditional_for(c)
            && !found.iter().any(|&(s, _)| s == c)
        {
            found.push((c, t));
        }
    }
    found
}

/// Overall script status of one text field.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "status")]
pub enum TextStatus {
    Empty,
    Traditional,
    HasSimplified { count: usize },
}

pub fn text_status(text: &str) -> TextStatus {
    if text.is_empty() {
        return TextStatus::Empty;
    }
    let count = find_simplified(text).len();
    if count == 0 {
        TextStatus::Traditional
    } else {
        TextStatus::HasSimplified { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_identity_pairs() {
        for &(s, t) in SIMPLIFIED_TO_TRADITIONAL {
            assert_ne!(s, t, "identity pair for {s}");
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = std::collections::BTreeSet::new();
        for &(s, _) in SIMPLIFIED_TO_TRADITIONAL {
            assert!(seen.insert(s), "duplicate key {s}");
        }
    }

    #[test]
    fn test_reign_title_characters_covered() {
        assert_eq!(traditional_for('绪'), Some('緒'));
        assert_eq!(traditional_for('统'), Some('統'));
        assert_eq!(traditional_for('圆'), Some('圓'));
        assert_eq!(traditional_for('國'), None);
    }

    #[test]
    fn test_find_simplified_preserves_order_and_dedups() {
        let found = find_simplified("光绪元宝银币，银元");
        assert_eq!(found, vec![('绪', '緒'), ('宝', '寶'), ('银', '銀'), ('币', '幣')]);
    }

    #[test]
    fn test_text_status() {
        assert_eq!(text_status(""), TextStatus::Empty);
        assert_eq!(text_status("光緒元寶庫平七錢二分"), TextStatus::Traditional);
        assert_eq!(
            text_status("光绪元宝"),
            TextStatus::HasSimplified { count: 2 }
        );
    }
}
