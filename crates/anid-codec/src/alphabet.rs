// Alfabety: alfabet bazowy (wagi znaków) oraz pojedynczy wiersz schematu.

use std::collections::HashMap;
use std::fmt;

/// Domyślny alfabet bazowy: cyfry, małe litery, wielkie litery (62 znaki).
/// Kolejność ma znaczenie, bo indeks znaku jest jego wagą.
pub const DEFAULT_BASE_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alfabet bazowy, używany wyłącznie do wyznaczania "wagi" wyemitowanego znaku.
///
/// Waga znaku to jego pozycja w alfabecie. Suma wag znaków wyemitowanych
/// wcześniej tworzy przesunięcie, które obraca mapowanie cyfra -> znak
/// na kolejnych pozycjach klucza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAlphabet {
    chars: Vec<char>,
    weights: HashMap<char, usize>,
}

impl BaseAlphabet {
    /// Tworzy alfabet z podanych znaków. Przy powtórzeniach wygrywa ostatnie wystąpienie.
    pub fn new(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        let weights = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        BaseAlphabet { chars, weights }
    }

    /// Waga znaku albo `None`, jeśli znak nie należy do alfabetu.
    pub fn weight(&self, c: char) -> Option<usize> {
        self.weights.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.weights.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for BaseAlphabet {
    fn default() -> Self {
        BaseAlphabet::new(DEFAULT_BASE_ALPHABET)
    }
}

impl fmt::Display for BaseAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Jeden wiersz schematu: mały alfabet, którego długość jest podstawą
/// dla wszystkich pozycji cyfr przypadających na ten wiersz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    chars: Vec<char>,
    index_of: HashMap<char, usize>,
}

impl Row {
    pub fn new(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        let index_of = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Row { chars, index_of }
    }

    /// Podstawa (liczba znaków) wiersza.
    pub fn radix(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Znak o podanym indeksie.
    ///
    /// # Panics
    ///
    /// Panikuje, jeśli `index >= radix()`. Wersja bez paniki: [`Row::get`].
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Znak o podanym indeksie albo `None` poza zakresem.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Indeks znaku w wierszu albo `None`, jeśli znak do wiersza nie należy.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index_of.get(&c).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Czy wszystkie znaki wiersza są różne.
    pub fn has_distinct_chars(&self) -> bool {
        self.index_of.len() == self.chars.len()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
