mod nfc_ext;

pub use nfc_ext::NfcExt;
