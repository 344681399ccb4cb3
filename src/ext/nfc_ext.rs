use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

pub trait NfcExt {
    /// Returns the NFC form of `self`, or `None` if it is already NFC.
    fn to_nfc_if_changed(&self) -> Option<String>;
}

impl NfcExt for str {
    fn to_nfc_if_changed(&self) -> Option<String> {
        if is_nfc_quick(self.chars()) == IsNormalized::Yes {
            return None;
        }

        let normalized: String = self.nfc().collect();
        (normalized != self).then_some(normalized)
    }
}
