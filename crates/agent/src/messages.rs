//! Fixed user-facing messages.

/// Greeting sent to new members and printed when an interactive chat starts.
pub const WELCOME_MESSAGE: &str = "👋 **Selamat datang di OSA Medical Assistant!**

Saya adalah AI assistant khusus untuk sistem monitoring OSA SleepSense, powered by Google Gemini AI.

🔬 **Informasi Medis OSA**
- Penjelasan tentang Obstructive Sleep Apnea
- Statistik prevalensi dan dampak kesehatan
- Risk factors dan gejala OSA

🔧 **Panduan Device SleepSense**
- Setup dan instalasi device IoT
- Troubleshooting sensor dan konektivitas
- Maintenance dan calibration

📊 **Monitoring & Data**
- Interpretasi dasar hasil monitoring
- Penjelasan AHI classification
- Kapan harus konsultasi dokter

💡 **Tips & Lifestyle**
- Sleep hygiene recommendations
- Lifestyle modifications untuk OSA

**Contoh pertanyaan:**
• \"Apa itu OSA dan bagaimana SleepSense membantu?\"
• \"Bagaimana cara setup device SleepSense?\"
• \"AHI saya 20, apa artinya?\"
• \"Device saya error, bagaimana troubleshoot?\"

Silakan tanya apa saja tentang OSA atau SleepSense! 😊";

/// Returned instead of an answer whenever the pipeline fails.
pub const FALLBACK_RESPONSE: &str = "😔 Maaf, terjadi kesalahan teknis sementara dengan Gemini AI. Silakan coba lagi dalam beberapa saat.

🔧 **Troubleshooting:**
- Pastikan koneksi internet stabil
- Coba restart aplikasi
- Hubungi support jika masalah berlanjut

📞 **Penting**: Jika Anda mengalami gejala OSA yang serius (sesak napas parah, nyeri dada), segera konsultasi dokter atau layanan gawat darurat!

Saya siap membantu lagi setelah masalah teknis ini teratasi. 🙏";

/// Sample questions shown by the docs endpoint and the CLI.
pub const SAMPLE_QUERIES: &[&str] = &[
    "Apa itu OSA dan bagaimana SleepSense membantu?",
    "Bagaimana cara setup device SleepSense?",
    "AHI saya 20, apa artinya?",
    "Device saya error, bagaimana troubleshoot?",
    "Sensor apa saja yang digunakan SleepSense?",
    "Kapan saya harus konsultasi ke dokter?",
];
