//! Canned chatbot strings, one table per language.

use super::resolver::Topic;
use crate::i18n::Language;

#[derive(Debug)]
pub struct CannedReplies {
    pub welcome: &'static str,
    pub fallback: &'static str,
    pub contact_hint: &'static str,
    appointment: &'static str,
    location: &'static str,
    contact: &'static str,
    treatments: &'static str,
    services: &'static str,
    hours: &'static str,
}

impl CannedReplies {
    pub fn for_language(language: Language) -> &'static CannedReplies {
        match language {
            Language::En => &ENGLISH,
            Language::Ar => &ARABIC,
        }
    }

    pub fn topic(&self, topic: Topic) -> &'static str {
        match topic {
            Topic::Appointment => self.appointment,
            Topic::Location => self.location,
            Topic::Contact => self.contact,
            Topic::Treatments => self.treatments,
            Topic::Services => self.services,
            Topic::Hours => self.hours,
        }
    }
}

static ENGLISH: CannedReplies = CannedReplies {
    welcome: "Hello! 👋 Welcome to Adam International Hospital. How can I assist you today?",
    fallback: "Thank you for your message! I'm not sure I have an answer for that yet.",
    contact_hint: "For specific medical questions or to schedule an appointment, please call us at 16992. Our team is here to help.",
    appointment: "I'd be happy to help you schedule an appointment! Please call us at 16992 or book online. Our fertility specialists are available for consultations Monday through Saturday.",
    location: "Adam International Hospital has multiple locations to serve you better. Please call 16992 for specific location details and directions.",
    contact: "You can reach us at 16992 for appointments and inquiries. Our patient care team is available to assist you with any questions about our services.",
    treatments: "We offer comprehensive fertility treatments including IVF, ICSI, fertility preservation, and more. Our experienced team provides personalized care for each patient.",
    services: "Our departments include fertility and IVF, obstetrics and gynecology, andrology, and a full laboratory. Ask me about any of them!",
    hours: "Our clinics receive patients Monday through Saturday. Call 16992 for the hours of a specific department.",
};

static ARABIC: CannedReplies = CannedReplies {
    welcome: "مرحباً! 👋 أهلاً بكم في مستشفى آدم الدولي. كيف يمكنني مساعدتك اليوم؟",
    fallback: "شكراً لرسالتك! لست متأكداً من أن لدي إجابة على ذلك بعد.",
    contact_hint: "للاستفسارات الطبية أو لحجز موعد، يرجى الاتصال بنا على 16992. فريقنا هنا لمساعدتك.",
    appointment: "يسعدني مساعدتك في حجز موعد! يرجى الاتصال بنا على 16992 أو الحجز عبر الإنترنت. أطباؤنا متاحون للاستشارات من الاثنين إلى السبت.",
    location: "لمستشفى آدم الدولي عدة فروع لخدمتكم. يرجى الاتصال على 16992 لمعرفة تفاصيل الفروع والاتجاهات.",
    contact: "يمكنكم التواصل معنا على 16992 للمواعيد والاستفسارات. فريق رعاية المرضى متاح للإجابة على جميع أسئلتكم.",
    treatments: "نقدم علاجات شاملة للخصوبة تشمل أطفال الأنابيب والحقن المجهري وحفظ الخصوبة وغيرها، مع رعاية شخصية لكل مريض.",
    services: "تشمل أقسامنا الخصوبة وأطفال الأنابيب، النساء والتوليد، أمراض الذكورة، والمختبر. اسألني عن أي منها!",
    hours: "تستقبل عياداتنا المرضى من الاثنين إلى السبت. اتصل على 16992 لمعرفة مواعيد قسم معين.",
};
