//! The embedded SleepSense knowledge base.
//!
//! Content is taken from the SleepSense research paper ("SleepSense: Inovasi
//! Diagnosis OSA Berbasis AI dan IoT") and kept in Indonesian, the language
//! the assistant answers in. Section order inside a domain is significant:
//! it is the order sections appear in the prompt.

use sleepsense_core::Domain;

pub(crate) type SectionTable = &'static [(&'static str, &'static str)];

pub(crate) const BUILTIN: &[(Domain, SectionTable)] = &[
    (Domain::Medical, MEDICAL),
    (Domain::Technology, TECHNOLOGY),
    (Domain::Clinical, CLINICAL),
    (Domain::Device, DEVICE),
    (Domain::Safety, SAFETY),
];

const MEDICAL: SectionTable = &[
    (
        "osa_definition",
        "Obstructive Sleep Apnea (OSA) adalah gangguan pernapasan akibat obstruksi \
         sebagian atau total pada saluran napas atas selama tidur, yang menyebabkan \
         episode hipopnea dan apnea intermiten. Kondisi ini terjadi akibat perubahan \
         tonus otot saluran napas selama tidur, terutama selama fase inspirasi, \
         yang menyebabkan penurunan saturasi oksigen arteri dan disregulasi otonom.",
    ),
    (
        "global_prevalence",
        "Berdasarkan research SleepSense, lebih dari 1 miliar orang dewasa di dunia \
         mengalami OSA dengan Apnea-Hypopnea Index (AHI) ≥ 5/jam, dan lebih dari \
         425 juta orang menderita OSA sedang hingga berat (AHI ≥ 15/jam).",
    ),
    (
        "indonesia_prevalence",
        "Di Indonesia, penelitian berbasis kuesioner Stop-Bang di lima wilayah Jakarta \
         mengungkap bahwa 49,5% dari 202 responden memiliki risiko OSA tinggi, \
         sementara studi berbasis polisomnografi (PSG) menunjukkan bahwa 52,5% \
         pengemudi taksi mengalami OSA.",
    ),
    (
        "health_impact",
        "OSA memiliki implikasi serius terhadap kesehatan sistemik, meningkatkan risiko \
         hipertensi, penyakit jantung koroner, stroke, dan diabetes tipe 2, serta \
         menyebabkan penurunan fungsi kognitif akibat hipoksia intermiten dan stres \
         oksidatif yang merusak jaringan otak. Prevalensi depresi pada pasien OSA \
         dilaporkan mencapai 50%.",
    ),
    (
        "underdiagnosis",
        "Lebih dari 85% pasien dengan OSA yang secara klinis signifikan tidak pernah \
         terdiagnosis. Hal ini terjadi karena banyak pasien tidak menyadari gejala \
         mereka, seperti mendengkur berat dan terbangun di malam hari.",
    ),
];

const TECHNOLOGY: SectionTable = &[
    (
        "overview",
        "SleepSense adalah sistem diagnosis OSA berbasis AI dan IoT yang memungkinkan \
         pemantauan ambulatory langsung di rumah pasien. Teknologi ini dirancang \
         agar non-invasif, portabel, dan tetap mempertahankan akurasi klinis tinggi.",
    ),
    (
        "sensors",
        "SleepSense menggunakan sistem pemantauan gerakan dada berbasis sensor multimodal:\n\
         - ECG (AD8232): Elektrokardiografi untuk aktivitas listrik jantung\n\
         - SpO₂ (MAX30102): Saturasi oksigen perifer dan detak jantung\n\
         - Motion (MPU6050): Giroskop/akselerometer 6-axis untuk gerakan thorax\n\
         - Sound (KY-038): Deteksi suara dengkuran sebagai indikator OSA\n\
         - Piezoelectric: Mendeteksi pola pernapasan berdasarkan gerakan dada",
    ),
    (
        "ai_technology",
        "Sistem SleepSense dilengkapi dengan model hybrid deep learning (CNN - \
         Convolutional Neural Network dan LSTM - Long Short-Term Memory) yang mampu \
         menganalisis pola pernapasan secara temporal, membedakan apnea, hypopnea, \
         dan pernapasan normal, serta mengklasifikasikan tingkat keparahan OSA.",
    ),
    (
        "accuracy",
        "Berdasarkan penelitian, kombinasi fitur aliran napas dan saturasi oksigen \
         dapat menghasilkan akurasi 94% dalam mendeteksi apnea dan hypopnea, serta \
         mencapai akurasi 99% dalam skrining OSA dengan AUC 0,99. Dalam klasifikasi \
         tingkat keparahan OSA, model memiliki akurasi 93% dengan AUC 0,91.",
    ),
    (
        "hardware_specs",
        "Komponen Hardware SleepSense:\n\
         - Microcontroller: ESP32-S3 (dual-core, WiFi/BLE terintegrasi)\n\
         - Power: Baterai Lithium Polymer 3.7V (2000mAh) dengan modul pengisian TP4056\n\
         - Communication: WiFi/Bluetooth untuk transmisi data real-time\n\
         - Housing: Material elastis tingkat medis, silikon hypoallergenic\n\
         - Estimasi biaya prototype: ~IDR 978,300",
    ),
];

const CLINICAL: SectionTable = &[
    (
        "ahi_classification",
        "Diagnosis OSA berdasarkan Apnea-Hypopnea Index (AHI):\n\
         - AHI 5-14: OSA derajat ringan\n\
         - AHI 15-29: OSA derajat sedang\n\
         - AHI ≥30: OSA derajat berat\n\
         \n\
         Hasil yang menunjukkan lima atau lebih episode obstruksi jalan napas per jam \
         tidur dianggap tegak untuk diagnosis OSA.",
    ),
    (
        "psg_limitations",
        "Polysomnography (PSG) sebagai baku emas diagnosis OSA memiliki keterbatasan:\n\
         - Biaya tinggi dan memerlukan fasilitas khusus laboratorium tidur\n\
         - Tidak tersedia di semua rumah sakit\n\
         - Pemeriksaan perlu dilakukan dalam periode lama sesuai jam tidur normal\n\
         - Menyebabkan ketidaknyamanan bagi pasien",
    ),
    (
        "sleepsense_advantages",
        "Keunggulan SleepSense dibandingkan PSG konvensional:\n\
         - Non-invasif dan dapat dilakukan di rumah\n\
         - Biaya lebih terjangkau dan accessible\n\
         - Monitoring berkelanjutan tanpa mengganggu pola tidur\n\
         - Real-time data transmission ke layanan kesehatan\n\
         - Enkripsi end-to-end sesuai standar HIPAA dan GDPR",
    ),
    (
        "when_consult_doctor",
        "Kapan harus konsultasi dokter spesialis:\n\
         - Gejala OSA persisten (mendengkur berat, sesak saat tidur)\n\
         - Hasil monitoring SleepSense menunjukkan AHI tinggi secara konsisten\n\
         - Gejala depresi atau fatigue berlebihan\n\
         - Tanda-tanda komplikasi kardiovaskular\n\
         - Penurunan kualitas hidup yang signifikan",
    ),
];

const DEVICE: SectionTable = &[
    (
        "setup_guide",
        "Panduan Setup SleepSense:\n\
         1. Pasang belt sensor di area thorax dengan posisi nyaman\n\
         2. Attach pulse oximeter di jari (biasanya jari telunjuk)\n\
         3. Pastikan koneksi WiFi/Bluetooth aktif dan stabil\n\
         4. Buka dashboard aplikasi untuk monitoring real-time\n\
         5. Lakukan kalibrasi sensor sebelum tidur\n\
         6. Pastikan baterai device terisi penuh",
    ),
    (
        "troubleshooting",
        "Troubleshooting SleepSense Device:\n\
         - Jika sensor tidak merespons: Restart ESP32 dan check koneksi kabel\n\
         - Signal quality buruk: Pastikan sensor terpasang dengan benar di kulit\n\
         - Koneksi terputus: Check WiFi/Bluetooth dan restart aplikasi\n\
         - Baterai cepat habis: Check PowerBoost module dan kualitas baterai\n\
         - Data tidak akurat: Kalibrasi ulang sensor dan check positioning",
    ),
    (
        "maintenance",
        "Maintenance Device SleepSense:\n\
         - Bersihkan sensor secara rutin dengan alkohol 70%\n\
         - Check kondisi belt dan housing sensor\n\
         - Update firmware secara berkala\n\
         - Monitor kondisi baterai dan ganti jika diperlukan\n\
         - Backup data monitoring secara rutin",
    ),
];

const SAFETY: SectionTable = &[
    (
        "medical_disclaimer",
        "DISCLAIMER MEDIS PENTING:\n\
         SleepSense adalah alat bantu screening dan monitoring, bukan pengganti \
         konsultasi medis profesional. Untuk diagnosis definitif OSA dan penentuan \
         terapi yang tepat, selalu konsultasikan dengan dokter spesialis pulmonologi \
         atau sleep medicine.",
    ),
    (
        "emergency_guidance",
        "PERHATIAN - Kondisi yang Memerlukan Bantuan Medis Segera:\n\
         - Sesak napas parah saat tidur atau bangun tidur\n\
         - Nyeri dada yang persisten\n\
         - Pusing berlebihan atau pingsan\n\
         - Detak jantung tidak teratur yang ekstrem\n\
         \n\
         Jika mengalami gejala di atas, SEGERA hubungi dokter atau layanan \
         gawat darurat terdekat.",
    ),
    (
        "device_safety",
        "Keamanan Penggunaan Device:\n\
         - Device ini aman untuk penggunaan jangka panjang\n\
         - Material yang digunakan bersifat hypoallergenic\n\
         - Tidak ada radiasi berbahaya yang dipancarkan\n\
         - Data kesehatan dienkripsi end-to-end\n\
         - Tidak mengganggu alat pacu jantung atau device medis lainnya",
    ),
];
