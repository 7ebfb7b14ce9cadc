//! Cyrillic to ASCII transliteration of file names.
//!
//! Every character of the input is mapped independently:
//! - Cyrillic letters listed in the table become their ASCII spelling
//!   (possibly empty, possibly several letters long).
//! - ASCII letters, digits and the dot are kept as they are.
//! - Anything else becomes a single underscore.
//!
//! # Examples
//!
//! ```
//! use dirsort::transliterate::transliterate;
//!
//! assert_eq!(transliterate("Фото.JPG"), "Foto.JPG");
//! assert_eq!(transliterate("звіт 2024.pdf"), "zvit_2024.pdf");
//! ```

/// Returns the ASCII replacement for a single Cyrillic character.
///
/// Upper and lower case are looked up independently, so `Є` maps to `Ye`
/// while `є` maps to `ie`.
pub fn lookup(c: char) -> Option<&'static str> {
    let ascii = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'є' => "ie",
        'ж' => "zh",
        'з' => "z",
        'и' => "y",
        'і' => "i",
        'ї' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ь' => "",
        'ю' => "iu",
        'я' => "ia",
        'ы' => "y",
        'ъ' => "",
        'э' => "e",
        'ё' => "io",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "H",
        'Ґ' => "G",
        'Д' => "D",
        'Е' => "E",
        'Є' => "Ye",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "Y",
        'І' => "I",
        'Ї' => "Yi",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "Kh",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Shch",
        'Ь' => "",
        'Ю' => "Yu",
        'Я' => "Ya",
        'Ы' => "Y",
        'Ъ' => "",
        'Э' => "E",
        'Ё' => "Io",
        _ => return None,
    };
    Some(ascii)
}

/// Transliterates a file name into its safe ASCII form.
///
/// The result only ever contains ASCII alphanumerics, `.` and `_`, so applying
/// the function twice gives the same result as applying it once.
pub fn transliterate(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    for c in name.chars() {
        if let Some(ascii) = lookup(c) {
            normalized.push_str(ascii);
        } else if c.is_ascii_alphanumeric() || c == '.' {
            normalized.push(c);
        } else {
            normalized.push('_');
        }
    }
    normalized
}

/// Name used when a transliterated name is empty, `.` or `..`.
pub const PLACEHOLDER_NAME: &str = "_";

/// Transliterates a file name and makes sure the result names a file.
///
/// Names such as `ь` or `ь..` transliterate to nothing or to a path
/// component that refers to a directory; those become [`PLACEHOLDER_NAME`].
pub fn safe_file_name(name: &str) -> String {
    let normalized = transliterate(name);
    match normalized.as_str() {
        "" | "." | ".." => PLACEHOLDER_NAME.to_string(),
        _ => normalized,
    }
}
