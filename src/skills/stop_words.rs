// Default stop word lists, already lower-cased and stripped of punctuation.

pub const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "eight",
    "either", "five", "for", "four", "from", "further", "get", "gets", "got", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "me", "might", "more", "most", "must", "my",
    "myself", "nine", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "seven", "shall",
    "she", "should", "six", "so", "some", "such", "ten", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "three", "through",
    "to", "too", "two", "under", "until", "up", "upon", "us", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your", "yours", "yourself", "yourselves",
];

pub const FRENCH: &[&str] = &[
    "a", "à", "afin", "ai", "aie", "aient", "ainsi", "alors", "as", "au", "aucun", "aucune",
    "auquel", "aura", "aurai", "auraient", "aurais", "aurait", "aussi", "autre", "aux",
    "auxquels", "avaient", "avais", "avait", "avant", "avec", "avez", "avoir", "avons", "c",
    "ça", "car", "ce", "ceci", "cela", "celle", "celles", "celui", "ces", "cet", "cette", "ceux",
    "chaque", "comme", "d", "dans", "de", "des", "donc", "dont", "du", "elle", "elles", "en",
    "encore", "entre", "es", "est", "et", "étaient", "étais", "était", "été", "être", "eu",
    "eux", "il", "ils", "j", "je", "l", "la", "le", "les", "leur", "leurs", "lui", "m", "ma",
    "mais", "me", "même", "mes", "moi", "mon", "n", "ne", "ni", "nos", "notre", "nous", "on",
    "ont", "ou", "où", "par", "pas", "pour", "qu", "que", "quel", "quelle", "qui", "s", "sa",
    "sans", "se", "ses", "si", "son", "sont", "sur", "t", "ta", "te", "tes", "toi", "ton", "tu",
    "un", "une", "vos", "votre", "vous", "y",
];

pub const GERMAN: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderen", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit",
    "dann", "das", "dass", "dein", "dem", "den", "der", "des", "dich", "die", "dies", "diese",
    "dieser", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer",
    "eines", "er", "es", "euch", "euer", "für", "hab", "habe", "haben", "hat", "hatte", "ich",
    "ihm", "ihn", "ihr", "ihre", "im", "in", "ist", "jede", "jeder", "kann", "kein", "keine",
    "man", "mein", "meine", "mich", "mir", "mit", "muss", "nach", "nicht", "nichts", "noch",
    "nun", "nur", "ob", "oder", "ohne", "sehr", "sein", "seine", "sich", "sie", "sind", "so",
    "über", "um", "und", "uns", "unser", "unter", "vom", "von", "vor", "war", "waren", "was",
    "weil", "wenn", "wer", "wie", "wir", "wird", "wo", "zu", "zum", "zur",
];

pub const SPANISH: &[&str] = &[
    "a", "al", "algo", "algunos", "ante", "antes", "como", "con", "contra", "cual", "cuando",
    "de", "del", "desde", "donde", "durante", "e", "el", "él", "ella", "ellas", "ellos", "en",
    "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "está", "estas", "este",
    "esto", "estos", "fue", "ha", "han", "hasta", "hay", "la", "las", "le", "les", "lo", "los",
    "más", "me", "mi", "mis", "mucho", "muy", "nada", "ni", "no", "nos", "nosotros", "o", "otra",
    "otro", "para", "pero", "poco", "por", "porque", "que", "qué", "quien", "se", "ser", "si",
    "sí", "sin", "sobre", "son", "su", "sus", "también", "tanto", "te", "tiene", "todo", "todos",
    "tu", "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
];

pub const ITALIAN: &[&str] = &[
    "a", "ad", "agli", "ai", "al", "alla", "alle", "anche", "che", "chi", "ci", "come", "con",
    "da", "dai", "dal", "dalla", "degli", "dei", "del", "della", "delle", "di", "e", "è", "ed",
    "gli", "ha", "hanno", "ho", "i", "il", "in", "io", "la", "le", "lei", "lo", "loro", "lui",
    "ma", "mi", "ne", "negli", "nei", "nel", "nella", "noi", "non", "o", "per", "più", "quale",
    "quando", "quella", "quello", "questa", "questo", "se", "si", "sono", "su", "sua", "sue",
    "sui", "sul", "suo", "tra", "tu", "un", "una", "uno", "voi",
];

pub const DUTCH: &[&str] = &[
    "aan", "al", "alles", "als", "bij", "dan", "dat", "de", "der", "deze", "die", "dit", "doch",
    "door", "dus", "een", "en", "er", "ge", "geen", "had", "heb", "hebben", "heeft", "hem",
    "het", "hier", "hij", "hoe", "hun", "ik", "in", "is", "ja", "je", "kan", "maar", "me", "men",
    "met", "mij", "na", "naar", "niet", "niets", "nog", "nu", "of", "om", "omdat", "ons", "ook",
    "op", "over", "te", "tot", "u", "uit", "van", "veel", "voor", "want", "was", "wat", "we",
    "wel", "werd", "wie", "wij", "wordt", "zal", "ze", "zich", "zij", "zijn", "zo", "zou",
];

pub const PORTUGUESE: &[&str] = &[
    "a", "ao", "aos", "as", "à", "às", "até", "com", "como", "da", "das", "de", "dela", "dele",
    "do", "dos", "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "essa", "esse",
    "esta", "está", "este", "eu", "foi", "há", "isso", "isto", "já", "lhe", "mais", "mas", "me",
    "mesmo", "meu", "minha", "muito", "na", "nas", "não", "nem", "no", "nos", "nós", "num",
    "numa", "o", "os", "ou", "para", "pela", "pelo", "por", "quando", "que", "quem", "se", "sem",
    "ser", "seu", "sua", "são", "também", "te", "tem", "um", "uma", "você",
];

pub const ARABIC: &[&str] = &[
    "أن", "أو", "إلى", "إن", "الذي", "التي", "الذين", "ان", "او", "اي", "بعد", "بين", "ثم",
    "حتى", "حيث", "ذلك", "عن", "على", "عند", "غير", "فى", "في", "قبل", "قد", "كان", "كانت",
    "كل", "كما", "لا", "لم", "لن", "له", "لها", "ما", "مع", "من", "منذ", "هذا", "هذه", "هو",
    "هي", "و", "وقد", "ولا", "وهو", "يكون",
];

pub const CZECH: &[&str] = &[
    "a", "aby", "ale", "ani", "ano", "asi", "až", "bez", "bude", "by", "byl", "byla", "bylo",
    "být", "co", "což", "do", "i", "jak", "jako", "je", "jeho", "jej", "její", "jen", "ještě",
    "již", "jsem", "jsme", "jsou", "jste", "k", "kde", "kdo", "když", "ke", "která", "které",
    "který", "mezi", "mi", "na", "nad", "ne", "nebo", "o", "od", "po", "pod", "pro", "proto",
    "při", "s", "se", "si", "so", "tak", "také", "tam", "to", "tu", "ty", "u", "už", "v", "ve",
    "však", "z", "za", "ze", "že",
];

pub const DANISH: &[&str] = &[
    "af", "alle", "andet", "andre", "at", "blev", "blive", "bliver", "da", "de", "dem", "den",
    "denne", "der", "deres", "det", "dette", "dig", "din", "disse", "dog", "du", "efter", "eller",
    "en", "end", "er", "et", "for", "fra", "ham", "han", "hans", "har", "havde", "have", "hende",
    "hendes", "her", "hos", "hun", "hvad", "hvis", "hvor", "i", "ikke", "ind", "jeg", "jer",
    "jo", "kunne", "man", "mange", "med", "meget", "men", "mig", "min", "mod", "ned", "noget",
    "nogle", "nu", "når", "og", "også", "om", "op", "os", "over", "på", "selv", "sig", "sin",
    "skal", "skulle", "som", "sådan", "thi", "til", "ud", "under", "var", "vi", "vil", "ville",
    "vor",
];

pub const JAPANESE: &[&str] = &[
    "あそこ", "あの", "あれ", "いる", "う", "え", "お", "か", "が", "から", "こと", "この",
    "これ", "さ", "し", "する", "そこ", "その", "それ", "た", "だ", "て", "で", "です", "と",
    "どこ", "な", "に", "の", "は", "へ", "ます", "も", "もの", "や", "よ", "より", "を",
];

pub const NORWEGIAN_BOKMAL: &[&str] = &[
    "alle", "at", "av", "bare", "både", "da", "de", "deg", "dei", "deim", "deira", "deires",
    "dem", "den", "denne", "der", "dere", "deres", "det", "dette", "di", "din", "disse", "ditt",
    "du", "eg", "ein", "eit", "eitt", "eller", "elles", "en", "er", "et", "ett", "etter", "for",
    "fordi", "fra", "før", "ha", "hadde", "han", "hans", "har", "hennar", "henne", "hennes",
    "her", "hun", "hva", "hvem", "hver", "hvis", "hvor", "i", "ikke", "inn", "jeg", "kan",
    "kom", "kunne", "man", "mange", "med", "meg", "men", "min", "mitt", "mot", "mye", "må",
    "ned", "noe", "noen", "nå", "og", "også", "om", "opp", "oss", "over", "på", "seg", "selv",
    "sin", "sitt", "skal", "skulle", "slik", "som", "til", "under", "ut", "var", "ved", "vi",
    "vil", "ville", "vær", "være", "vært", "å",
];

pub const POLISH: &[&str] = &[
    "a", "aby", "ale", "bardzo", "bez", "bo", "być", "był", "była", "było", "były", "będzie",
    "co", "czy", "dla", "do", "gdy", "go", "i", "ich", "ja", "jak", "jako", "je", "jego", "jej",
    "jest", "jeszcze", "już", "ku", "która", "które", "który", "lub", "ma", "mi", "może", "na",
    "nad", "nie", "nich", "niż", "o", "od", "on", "ona", "one", "oni", "ono", "oraz", "po",
    "pod", "przez", "przy", "się", "są", "ta", "tak", "także", "te", "tego", "tej", "ten", "to",
    "tu", "tylko", "w", "we", "więc", "z", "za", "ze", "że",
];

pub const SWEDISH: &[&str] = &[
    "alla", "allt", "att", "av", "blev", "bli", "blir", "de", "dem", "den", "denna", "deras",
    "dess", "det", "detta", "dig", "din", "ditt", "du", "där", "då", "efter", "ej", "eller",
    "en", "er", "ett", "från", "för", "ha", "hade", "han", "hans", "har", "henne", "hennes",
    "hon", "honom", "hur", "här", "i", "icke", "ingen", "inom", "inte", "jag", "ju", "kan",
    "kunde", "man", "med", "mellan", "men", "mig", "min", "mitt", "mot", "mycket", "ni", "nu",
    "när", "någon", "något", "några", "och", "om", "oss", "på", "samma", "sedan", "sig", "sin",
    "sina", "sitt", "själv", "skulle", "som", "så", "till", "under", "upp", "ut", "var", "vad",
    "vara", "vi", "vid", "vilken", "vår", "åt", "än", "är", "över",
];

pub const RUSSIAN: &[&str] = &[
    "а", "без", "более", "бы", "был", "была", "были", "было", "быть", "в", "вам", "вас",
    "весь", "во", "вот", "все", "всего", "вы", "да", "для", "до", "его", "ее", "если", "есть",
    "еще", "же", "за", "здесь", "и", "из", "или", "им", "их", "к", "как", "когда", "кто", "ли",
    "мне", "мы", "на", "над", "не", "него", "нее", "нет", "ни", "них", "но", "ну", "о", "об",
    "он", "она", "они", "оно", "от", "по", "под", "при", "с", "со", "так", "также", "там",
    "тем", "то", "того", "тоже", "только", "ты", "у", "уже", "чем", "что", "чтобы", "эта",
    "эти", "это", "я",
];

/// Stop words for a language code; unsupported codes fall back to English.
pub fn for_language(language_code: &str) -> &'static [&'static str] {
    match language_code.trim().to_lowercase().as_str() {
        "ar" => ARABIC,
        "cs" => CZECH,
        "da" => DANISH,
        "de" => GERMAN,
        "es" => SPANISH,
        "fr" => FRENCH,
        "it" => ITALIAN,
        "jp" | "ja" => JAPANESE,
        "nb" => NORWEGIAN_BOKMAL,
        "nl" => DUTCH,
        "pl" => POLISH,
        "pt" => PORTUGUESE,
        "sv" => SWEDISH,
        "ru" => RUSSIAN,
        _ => ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_code_has_its_own_list() {
        for code in [
            "ar", "cs", "da", "de", "es", "fr", "it", "jp", "nb", "nl", "pl", "pt", "sv", "ru",
        ] {
            assert_ne!(for_language(code), ENGLISH, "{} fell back to English", code);
        }
        assert_eq!(for_language("ja"), JAPANESE);
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(for_language("xx"), ENGLISH);
        assert_eq!(for_language(" EN "), ENGLISH);
    }
}
