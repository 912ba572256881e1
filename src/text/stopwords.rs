use std::collections::HashSet;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Bangla stopwords: function words, numerals (words and digit glyphs),
/// ordinals, calendar words and a curated list of generic high-frequency
/// newsroom words. Entries are trimmed and NFC-composed when the set is built.
pub const BANGLA_STOPWORDS: &[&str] = &[
    "অবশ্য", "অন্তত", "অথবা", "অথচ", "অর্থাত", "অন্য", "আজ", "আছে", "আপনার", "আপনি", "আবার",
    "আমরা", "আমাকে", "আমাদের", "আমার", "আমি", "আরও", "আর", "আগে", "আগেই", "আগামী", "অবধি",
    "অনুযায়ী", "আদ্যভাগে", "এই", "একই", "এককে", "একটি", "এখন", "এখনও", "এখানে", "এখানেই",
    "এটি", "এটা", "এটাই", "এতটাই", "এবং", "একবার", "এবার", "এদের", "এঁদের", "এমন", "এমনকী",
    "এল", "এর", "এরা", "এঁরা", "এস", "এত", "এতে", "এসে", "একে", "এ", "ঐ", "ই", "ইহা",
    "ইত্যাদি", "উনি", "উপর", "উপরে", "উচিত", "ও", "ওই", "ওর", "ওরা", "ওঁর", "ওঁরা", "ওকে",
    "ওদের", "ওঁদের", "ওখানে", "কত", "কবে", "করতে", "কয়েক", "কয়েকটি", "করবে", "করলেন", "করার",
    "কারও", "করা", "করি", "করিয়ে", "করাই", "করলে", "করিতে", "করিয়া", "করেছিলেন", "করছে",
    "করছেন", "করেছেন", "করেছে", "করেন", "করবেন", "করায়", "করে", "করেই", "কাছ", "কাছে", "কারণ",
    "কিছু", "কিছুই", "কিন্তু", "কিংবা", "কি", "কী", "কেউ", "কেউই", "কাউকে", "কেন", "কে",
    "কোনও", "কোনো", "কোন", "কখনও", "ক্ষেত্রে", "খুব", "গুলি", "গিয়ে", "গিয়েছে", "গেছে",
    "গেল", "গেলে", "গোটা", "চলে", "চেয়ে", "ছাড়া", "ছাড়াও", "ছিলেন", "ছিল", "জন্য", "জানা",
    "ঠিক", "তিনি", "তিনঐ", "তিনিও", "তখন", "তবে", "তবু", "তাঁদের", "তাঁহারা", "তাঁরা", "তাঁর",
    "তাঁকে", "তাই", "তেমন", "তাকে", "তাহা", "তাহাতে", "তাহার", "তাদের", "তারপর", "তারা",
    "তারৈ", "তার", "তাহলে", "তা", "তাও", "তাতে", "তো", "তত", "তুমি", "তোমার", "তথা", "থাকে",
    "থাকা", "থাকায়", "থেকে", "থেকেও", "থাকবে", "থাকেন", "থাকবেন", "থেকেই", "দিকে", "দিতে",
    "দিয়ে", "দিয়েছে", "দিয়েছেন", "দু", "দুটি", "দুটো", "দেয়", "দেয়া", "দেওয়া", "দেওয়ার",
    "দেখা", "দেখে", "দেখতে", "দ্বারা", "ধরে", "ধরা", "নয়", "নানা", "না", "নাকি", "নাগাদ",
    "নিতে", "নিজে", "কাজে", "নিজেই", "নিজের", "নিজেদের", "নিয়ে", "নেওয়া", "নেওয়ার", "নেই",
    "নাই", "পক্ষে", "পর্যন্ত", "পাওয়া", "পারেন", "পারি", "পারে", "পরে", "পরেই", "পরেও", "পর",
    "পেয়ে", "প্রতি", "প্রভৃতি", "প্রায়", "ফের", "ফলে", "ফিরে", "ব্যবহার", "বলতে", "বললেন",
    "বলেছেন", "বলল", "বলা", "বলেন", "বলে", "বহু", "বসে", "বার", "বা", "বিনা", "বরং", "বদলে",
    "বাদে", "বিশেষ", "বিভিন্ন", "বিষয়টি", "ব্যবহার", "ব্যাপারে", "ভাবে", "ভাবেই", "মধ্যে",
    "মধ্যেই", "তোমাদের", "তোমরা", "মানুষ", "মানুষের", "মধ্যেও", "মধ্যভাগে", "মাধ্যমে", "মাঝে",
    "মতোই", "মোটেই", "যখন", "যদি", "যদিও", "যাবে", "যায়", "যাকে", "যাওয়া", "যাওয়ার", "যত",
    "যতটা", "যা", "যার", "যারা", "যাঁর", "যাঁরা", "যাদের", "যান", "যাচ্ছে", "যেতে", "যাতে",
    "যেন", "যেমন", "যেখানে", "যিনি", "যে", "রেখে", "রাখা", "রয়েছে", "রকম", "শুধু", "সঙ্গে",
    "সঙ্গেও", "সমস্ত", "সব", "সবার", "সহ", "সুতরাং", "সহিত", "সেই", "সেটা", "সেটি", "সেটাই",
    "সেটাও", "সম্প্রতি", "সেখান", "সেখানে", "সে", "স্পষ্ট", "স্বয়ং", "হইতে", "হইবে", "হৈলে",
    "হইয়া", "হচ্ছে", "হত", "কোনটি", "হতে", "হতেই", "হবে", "হবেন", "হয়েছিল", "হয়েছে",
    "হয়েছেন", "হয়ে", "হয়নি", "হয়", "হয়েই", "হয়তো", "হল", "হলে", "হলেই", "হলেও", "হলো",
    "হিসাবে", "হওয়া", "হওয়ার", "হওয়ায়", "হন", "হোক", "দেখা যায়", "শোনা যায়", "গত",
    "নিয়ে", "যায়", "হয়ে", "কথা", "দেওয়া", "কাজ", "তৈরি", "জানান", "দিয়ে", "জানিয়েছে",
    "০", "১", "১০", "১১", "১২", "১৩", "১৪", "২", "৩", "৪", "৫", "৬", "৭", "৮", "৯", "১১", "১২",
    "১৩", "১৪", "১৫", "১৬", "১৭", "১৮", "১৯", "২০", "২১", "২২", "২৩", "২৪", "২৫", "২৬", "২৭",
    "২৮", "২৯", "৩০", "৩১", "৩২", "৩৩", "৩৪", "৩৫", "৩৬", "৩৭", "৩৮", "৩৯", "৪০", "৪১", "৪২",
    "৪৩", "৪৪", "৪৫", "৪৬", "৪৭", "৪৮", "৪৯", "৫০", "৫১", "৫২", "৫৩", "৫৪", "৫৫", "৫৬", "৫৭",
    "৫৮", "৫৯", "৬০", "৬১", "৬২", "৬৩", "৬৪", "৬৫", "৬৬", "৬৭", "৬৮", "৬৯", "৭০", "৭১", "৭২",
    "৭৩", "৭৪", "৭৫", "৭৬", "৭৭", "৭৮", "৭৯", "৮০", "৮১", "৮২", "৮৩", "৮৪", "৮৫", "৮৬", "৮৭",
    "৮৮", "৮৯", "৯০", "৯১", "৯২", "৯৩", "৯৪", "৯৫", "৯৬", "৯৭", "৯৮", "৯৯", "১০০", "আলো", "এক",
    "একজন", "একটু", "ওপর", "খান", "কাজের থাকলে", "কারণে", "করো", "করুন", "কম", "দিলেন",
    "সাহায্য", "সুযোগ", "কমেছে", "চৌধুরী", "ছয়", "ছোট", "জানায়", "জানান", "জন", "চার",
    "যুক্ত", "ড:", "দিন", "দশ", "দুই", "নতুন", "শেষ", "নিলে", "নিন", "নয়", "পাবেন", "মাত্র",
    "মতো", "পেতে", "পারবেন", "দূরে", "যেকোনো", "থাকলে", "সম্ভাবনা", "একটা", "শুভ",
    "গুরুত্বপূর্ণ", "থাকতে", "রাখুন", "খেতে", "ব্যক্তি", "ঘটনা", "প্রথম", "প্রধান", "প্রকাশ",
    "বছর", "বড়", "বেশ", "বেশি", "মনে", "মো", "মোঃ", "প্রথম", "দ্বিতীয়", "তৃতীয়", "চতুর্থ",
    "পঞ্চম", "ষষ্ঠ", "সপ্তম", "অষ্টম", "নবম", "দশম", "একাদশ", "দ্বাদশ", "ত্রয়োদশ", "চতুর্দশ",
    "পঞ্চদশ", "ষোড়শ", "সপ্তদশ", "অষ্টাদশ", "ঊনবিংশ", "বিশতম", "১ম", "২য়", "৩য়", "৪র্থ",
    "৫ম", "৬ষ্ঠ", "৭ম", "৮ম", "৯ম", "১০ম", "১১তম", "১২তম", "১৩তম", "১৪তম", "১৫তম", "১৬তম",
    "১৭তম", "১৮তম", "১৯তম", "২০তম", "২১তম", "২২তম", "২৩তম", "২৪তম", "২৫তম", "২৬তম", "২৭তম",
    "২৮তম", "২৯তম", "৩০তম", "৩১তম", "৩২তম", "৩৩তম", "৩৪তম", "৩৫তম", "৩৬তম", "৩৭তম", "৩৮তম",
    "৩৯তম", "৪০তম", "৪১তম", "৪২তম", "৪৩তম", "৪৪তম", "৪৫তম", "৪৬তম", "৪৭তম", "৪৮তম", "৪৯তম",
    "৫০তম", "শতাংশ", "চালু", "কোটি", "দেশের", "দেশ", "শত", "হাজার", "লাখ", "কোটি", "মিলিয়ন",
    "বিলিয়ন", "বছর", "বছরের", "সুবিধা", "পাশাপাশি", "সেবা", "শত", "চেয়ারম্যান", "পরিচালক",
    "বিরুদ্ধে", "খবর", "অভিযোগ", "সালের", "হোসেন", "ধরনের", "রহমান", "সালে", "অনুষ্ঠান",
    "অনুষ্ঠানে", "অনেক", "কমে", "দেন", "উপস্থিত", "সরকারের", "বেড়েছে", "দেশে", "শুরু",
    "হিসেবে", "মোট", "সাধারণ", "বিষয়ে", "সভায়", "অংশ", "এম", "আরো", "সুযোগ", "এক", "দুই",
    "তিন", "চার", "পাঁচ", "ছয়", "সাত", "আট", "নয়", "দশ", "বর্তমানে", "জাতীয়", "অ্যান্ড",
    "সম্পর্কে", "পড়ে", "সময়", "ক", "খ", "গ", "ঘ", "ঙ", "চ", "ছ", "জ", "ঝ", "ঞ", "ট", "ঠ",
    "ড", "ঢ", "দ", "প", "ফ", "ব", "ভ", "ম", "য", "র", "ল", "শ", "ষ", "স", "হ", "ক্ষ", "ড়",
    "ঢ়", "য়", "ৎ", "অ", "আ", "ই", "ঈ", "উ", "ঊ", "এ", "ঐ", "ও", "ঔ", "সৃষ্টি", "হাতে",
    "এমনকি", "সামনে", "এসব", "তুলে", "গড়ে", "যেসব", "সেসব", "বন্ধ", "খোলা", "শুরু", "শেষ",
    "চেষ্টা", "সাফল্য", "সফলতা", "আশা", "সামনে", "পিছনে", "পারবে", "ব্যবহারে", "হাতে", "হতে",
    "এগিয়ে", "এরপর", "তারপর", "অতঃপর", "নেন", "শেষে", "শুরতে", "তুলে", "পারেননি", "কাল",
    "সবচেয়ে", "জানিয়েছেন", "জানিয়ে", "জানিয়েছিল", "জানিয়েছিলে", "লিখেছেন", "লিখতে", "চাই",
    "শুরু", "শনিবার", "রবিবার", "সোমবার", "মঙ্গলবার", "বুধবার", "বৃহঃস্পতিবার", "বৃহস্পতিবার",
    "শুক্রবার", "সিন্ধান্ত", "আছেন", "রাতে", "দুপুরে", "জানতে", "দাবি", "সাথে", "অবস্থায়",
    "নম্বর", "গ্রাম", "গ্রামের", "শহর", "শহরের", "ব্যবস্থা", "বাড়ি", "বাড়িতে", "চালিয়ে",
    "জনকে", "ঘটনার", "সদর", "নম্বর", "সংবাদ", "পত্রিকা", "নিশ্চিত", "সহকারী", "ছেলে", "মেয়ে",
    "এসময়", "পাঠানো", "নিচের", "প্রতিটি", "সদস্য", "বাকি", "বাংলাদেশ", "ঘোষণা", "ভূমিকা",
    "প্রয়োজন", "পরিমাণ", "অর্থ", "দাও", "নামে", "ঢাকা", "চট্টগ্রাম", "কুমিল্লা", "জানুয়ারি",
    "ফেব্রুয়ারি", "মার্চ", "এপ্রিল", "মে", "জুন", "জুলাই", "আগষ্ট", "সেপ্টেম্বর", "অক্টোবর",
    "নভেম্বর", "ডিসেম্বর", "বৈশাখ", "জৈষ্ঠ্য", "আষাঢ়", "শ্রাবণ", "ভাদ্র", "আশ্বিন",
    "কার্ত্তিক", "অগ্রহায়ন", "পৌষ", "মাঘ", "ফাল্গুন", "চৈত্র", "নাম", "অন্যান্য", "রাখতে",
    "দেবে", "দাম", "নির্বাহী", "সহজ", "বলছে", "সময়ে", "এসেছে", "উন্নত", "আপনাকে", "লাগান",
    "লাগিয়ে", "নিয়মিত", "জরুরি", "হক", "সাড়ে", "দায়িত্ব", "গ্রহণ", "ঘটনায়",
];

/// Immutable set of canonical stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words; each entry is trimmed and NFC-composed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().nfc().collect::<String>())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The stopword set used for the newspaper corpus.
    pub fn bangla() -> Self {
        Self::from_words(BANGLA_STOPWORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test after NFC composition of `token`.
    pub fn contains(&self, token: &str) -> bool {
        if is_nfc_quick(token.chars()) == IsNormalized::Yes {
            self.words.contains(token)
        } else {
            self.words.contains(&token.nfc().collect::<String>())
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Drop every stopword from `tokens`, keeping survivors in order.
    pub fn filter<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| !self.contains(token.as_ref()))
            .map(|token| token.as_ref().to_string())
            .collect()
    }
}
