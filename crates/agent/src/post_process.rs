//! Response post-processing: fixed suffix blocks appended to model output.
//!
//! Blocks are appended in this order, each preceded by a blank line:
//! 1. medical disclaimer, for medical intents
//! 2. technical support note, for device intents
//! 3. citation note, when any knowledge section was used

use sleepsense_core::IntentLabel;

pub const MEDICAL_DISCLAIMER: &str = "⚠️ **Disclaimer Medis**: Informasi ini untuk edukasi. SleepSense adalah alat screening - konsultasi dokter spesialis untuk diagnosis dan terapi yang tepat.";

pub const TECHNICAL_SUPPORT: &str = "🔧 **Technical Support**: Jika masalah berlanjut, dokumentasikan error dan hubungi technical support SleepSense.";

pub const CITATION: &str = "📚 **Referensi**: Informasi berdasarkan research paper \"SleepSense: Inovasi Diagnosis OSA Berbasis AI dan IoT\"";

/// The suffix blocks that apply to an (intent, has-sections) pair, in order.
pub fn suffix_blocks(intent: IntentLabel, has_sections: bool) -> Vec<&'static str> {
    let mut blocks = Vec::with_capacity(3);
    if intent.is_medical() {
        blocks.push(MEDICAL_DISCLAIMER);
    }
    if intent.is_device_support() {
        blocks.push(TECHNICAL_SUPPORT);
    }
    if has_sections {
        blocks.push(CITATION);
    }
    blocks
}

/// Append the applicable suffix blocks to the model's raw text.
pub fn enhance_response(raw: &str, intent: IntentLabel, has_sections: bool) -> String {
    let mut enhanced = raw.to_string();
    for block in suffix_blocks(intent, has_sections) {
        enhanced.push_str("\n\n");
        enhanced.push_str(block);
    }
    enhanced
}
