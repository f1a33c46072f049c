//! The standard curriculum: six levels of mathematics and science questions,
//! localized in English, Hindi and Odia.
//!
//! Content only. Everything here is plain data; rules live in `engine`.

use super::types::*;
use super::QuestionBank;
use crate::constants::QUESTIONS_PER_LEVEL;

fn t(en: &'static str, hi: &'static str, od: &'static str) -> LocalizedText {
    LocalizedText::new(en, hi, od)
}

#[allow(clippy::too_many_arguments)]
fn q(
    id: u16,
    subject: Subject,
    difficulty: Difficulty,
    time_limit_seconds: u32,
    prompt: LocalizedText,
    options: Vec<LocalizedText>,
    correct_option: usize,
) -> Question {
    Question {
        id,
        subject,
        difficulty,
        time_limit_seconds,
        prompt,
        options,
        correct_option,
    }
}

/// A numeric or symbolic option that reads the same in every language.
fn sym(s: &'static str) -> LocalizedText {
    LocalizedText::new(s, s, s)
}

/// Builds the full standard bank. Validation happens in `QuestionBank::new`.
pub fn standard_bank() -> QuestionBank {
    let questions = [
        sets_questions(),
        rational_questions(),
        equation_questions(),
        crop_questions(),
        nutrition_questions(),
        plant_questions(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    let levels = vec![
        level(1, Subject::Sets, t("Sets", "समुच्चय", "ସେଟ୍"), 101),
        level(
            2,
            Subject::RationalNumbers,
            t("Rational Numbers", "परिमेय संख्याएँ", "ପରିମେୟ ସଂଖ୍ୟା"),
            201,
        ),
        level(
            3,
            Subject::LinearEquations,
            t("Linear Equations", "रैखिक समीकरण", "ରୈଖିକ ସମୀକରଣ"),
            301,
        ),
        level(
            4,
            Subject::CropScience,
            t("Crop Science", "फसल विज्ञान", "ଫସଲ ବିଜ୍ଞାନ"),
            401,
        ),
        level(5, Subject::Nutrition, t("Nutrition", "पोषण", "ପୋଷଣ"), 501),
        level(
            6,
            Subject::PlantBiology,
            t("Plant Biology", "पादप जीवविज्ञान", "ଉଦ୍ଭିଦ ବିଜ୍ଞାନ"),
            601,
        ),
    ];

    QuestionBank::new(questions, levels)
}

fn level(number: u32, subject: Subject, title: LocalizedText, first_id: u16) -> LevelDefinition {
    LevelDefinition {
        level_number: number,
        subject,
        title,
        question_ids: (first_id..first_id + QUESTIONS_PER_LEVEL as u16).collect(),
        unlock_requirement: if number == 1 { None } else { Some(number - 1) },
    }
}

fn sets_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::Sets;
    vec![
        q(
            101,
            Sets,
            Easy,
            20,
            t(
                "A = {1, 2, 3, 4}. How many elements are in set A?",
                "A = {1, 2, 3, 4}. समुच्चय A में कितने अवयव हैं?",
                "A = {1, 2, 3, 4}. ସେଟ୍ A ରେ କେତୋଟି ଉପାଦାନ ଅଛି?",
            ),
            vec![sym("3"), sym("4"), sym("5"), sym("2")],
            1,
        ),
        q(
            102,
            Sets,
            Easy,
            20,
            t(
                "Which symbol shows that x is an element of set A?",
                "कौन-सा प्रतीक दर्शाता है कि x समुच्चय A का अवयव है?",
                "କେଉଁ ଚିହ୍ନ ଦର୍ଶାଏ ଯେ x ସେଟ୍ A ର ଏକ ଉପାଦାନ?",
            ),
            vec![sym("x ∈ A"), sym("x ⊂ A"), sym("x ∪ A"), sym("x ∩ A")],
            0,
        ),
        q(
            103,
            Sets,
            Easy,
            20,
            t(
                "If A = {1, 2} and B = {2, 3}, what is A ∪ B?",
                "यदि A = {1, 2} और B = {2, 3}, तो A ∪ B क्या है?",
                "ଯଦି A = {1, 2} ଏବଂ B = {2, 3}, ତେବେ A ∪ B କ'ଣ?",
            ),
            vec![sym("{2}"), sym("{1, 3}"), sym("{1, 2, 3}"), sym("{1, 2, 2, 3}")],
            2,
        ),
        q(
            104,
            Sets,
            Easy,
            20,
            t(
                "If A = {1, 2} and B = {2, 3}, what is A ∩ B?",
                "यदि A = {1, 2} और B = {2, 3}, तो A ∩ B क्या है?",
                "ଯଦି A = {1, 2} ଏବଂ B = {2, 3}, ତେବେ A ∩ B କ'ଣ?",
            ),
            vec![sym("{1, 2, 3}"), sym("{2}"), sym("{1}"), sym("{3}")],
            1,
        ),
        q(
            105,
            Sets,
            Medium,
            25,
            t(
                "The set with no elements is called the ___ set.",
                "जिस समुच्चय में कोई अवयव नहीं होता, उसे ___ समुच्चय कहते हैं।",
                "ଯେଉଁ ସେଟ୍‌ରେ କୌଣସି ଉପାଦାନ ନ ଥାଏ, ତାହାକୁ ___ ସେଟ୍ କୁହାଯାଏ।",
            ),
            vec![
                t("universal", "सार्वत्रिक", "ସାର୍ବଜନୀନ"),
                t("finite", "परिमित", "ସସୀମ"),
                t("singleton", "एकल", "ଏକକ"),
                t("empty", "रिक्त", "ଶୂନ୍ୟ"),
            ],
            3,
        ),
        q(
            106,
            Sets,
            Hard,
            30,
            t(
                "How many subsets does a set with 3 elements have?",
                "3 अवयवों वाले समुच्चय के कितने उपसमुच्चय होते हैं?",
                "3 ଉପାଦାନ ଥିବା ସେଟ୍‌ର କେତୋଟି ଉପସେଟ୍ ଅଛି?",
            ),
            vec![sym("6"), sym("8"), sym("9"), sym("3")],
            1,
        ),
    ]
}

fn rational_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::RationalNumbers;
    vec![
        q(
            201,
            RationalNumbers,
            Easy,
            20,
            t(
                "Which of these is a rational number?",
                "इनमें से कौन-सी परिमेय संख्या है?",
                "ଏଥି ମଧ୍ୟରୁ କେଉଁଟି ପରିମେୟ ସଂଖ୍ୟା?",
            ),
            vec![sym("√2"), sym("π"), sym("3/4"), sym("√5")],
            2,
        ),
        q(
            202,
            RationalNumbers,
            Easy,
            20,
            t(
                "What is -3/4 + 3/4?",
                "-3/4 + 3/4 का मान क्या है?",
                "-3/4 + 3/4 ର ମୂଲ୍ୟ କେତେ?",
            ),
            vec![sym("0"), sym("3/2"), sym("-3/2"), sym("1")],
            0,
        ),
        q(
            203,
            RationalNumbers,
            Medium,
            25,
            t(
                "The standard form of 12/-18 is:",
                "12/-18 का मानक रूप है:",
                "12/-18 ର ମାନକ ରୂପ:",
            ),
            vec![sym("2/3"), sym("-2/3"), sym("-12/18"), sym("6/-9")],
            1,
        ),
        q(
            204,
            RationalNumbers,
            Medium,
            25,
            t(
                "Which rational number lies between 1/2 and 1?",
                "कौन-सी परिमेय संख्या 1/2 और 1 के बीच है?",
                "କେଉଁ ପରିମେୟ ସଂଖ୍ୟା 1/2 ଓ 1 ମଧ୍ୟରେ ଅଛି?",
            ),
            vec![sym("1/4"), sym("5/4"), sym("3/4"), sym("2")],
            2,
        ),
        q(
            205,
            RationalNumbers,
            Easy,
            20,
            t(
                "The additive inverse of 5/7 is:",
                "5/7 का योज्य प्रतिलोम है:",
                "5/7 ର ଯୋଗାତ୍ମକ ବିଲୋମ:",
            ),
            vec![sym("-5/7"), sym("7/5"), sym("-7/5"), sym("5/7")],
            0,
        ),
        q(
            206,
            RationalNumbers,
            Hard,
            30,
            t(
                "What is (2/3) × (9/4)?",
                "(2/3) × (9/4) का मान क्या है?",
                "(2/3) × (9/4) ର ମୂଲ୍ୟ କେତେ?",
            ),
            vec![sym("8/27"), sym("3/2"), sym("6/7"), sym("1/2")],
            1,
        ),
    ]
}

fn equation_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::LinearEquations;
    vec![
        q(
            301,
            LinearEquations,
            Easy,
            20,
            t(
                "Solve: x + 5 = 12",
                "हल कीजिए: x + 5 = 12",
                "ସମାଧାନ କରନ୍ତୁ: x + 5 = 12",
            ),
            vec![sym("x = 5"), sym("x = 6"), sym("x = 7"), sym("x = 17")],
            2,
        ),
        q(
            302,
            LinearEquations,
            Easy,
            20,
            t(
                "Solve: 3x = 21",
                "हल कीजिए: 3x = 21",
                "ସମାଧାନ କରନ୍ତୁ: 3x = 21",
            ),
            vec![sym("x = 7"), sym("x = 63"), sym("x = 18"), sym("x = 24")],
            0,
        ),
        q(
            303,
            LinearEquations,
            Medium,
            25,
            t(
                "Solve: 2x - 3 = 7",
                "हल कीजिए: 2x - 3 = 7",
                "ସମାଧାନ କରନ୍ତୁ: 2x - 3 = 7",
            ),
            vec![sym("x = 2"), sym("x = 5"), sym("x = 10"), sym("x = -5")],
            1,
        ),
        q(
            304,
            LinearEquations,
            Medium,
            25,
            t(
                "If 5x + 2 = 17, then x = ?",
                "यदि 5x + 2 = 17, तो x = ?",
                "ଯଦି 5x + 2 = 17, ତେବେ x = ?",
            ),
            vec![sym("3"), sym("5"), sym("15"), sym("19")],
            0,
        ),
        q(
            305,
            LinearEquations,
            Easy,
            20,
            t(
                "Solve: x/4 = 3",
                "हल कीजिए: x/4 = 3",
                "ସମାଧାନ କରନ୍ତୁ: x/4 = 3",
            ),
            vec![sym("x = 3/4"), sym("x = 7"), sym("x = 12"), sym("x = 1")],
            2,
        ),
        q(
            306,
            LinearEquations,
            Hard,
            30,
            t(
                "The sum of two consecutive numbers is 25. The smaller one is:",
                "दो क्रमागत संख्याओं का योग 25 है। छोटी संख्या है:",
                "ଦୁଇଟି କ୍ରମାଗତ ସଂଖ୍ୟାର ଯୋଗଫଳ 25। ଛୋଟ ସଂଖ୍ୟାଟି ହେଉଛି:",
            ),
            vec![sym("11"), sym("12"), sym("13"), sym("24")],
            1,
        ),
    ]
}

fn crop_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::CropScience;
    vec![
        q(
            401,
            CropScience,
            Easy,
            20,
            t(
                "Rice grows best in which cropping season?",
                "धान किस ऋतु में सबसे अच्छा उगता है?",
                "ଧାନ କେଉଁ ଋତୁରେ ସବୁଠାରୁ ଭଲ ବଢ଼େ?",
            ),
            vec![
                t("Kharif", "ख़रीफ़", "ଖରିଫ୍"),
                t("Rabi", "रबी", "ରବି"),
                t("Zaid", "ज़ायद", "ଜାଇଦ୍"),
                t("Winter", "शीत", "ଶୀତ"),
            ],
            0,
        ),
        q(
            402,
            CropScience,
            Easy,
            20,
            t(
                "Wheat is a ___ crop.",
                "गेहूँ एक ___ फसल है।",
                "ଗହମ ଏକ ___ ଫସଲ।",
            ),
            vec![
                t("Kharif", "ख़रीफ़", "ଖରିଫ୍"),
                t("Zaid", "ज़ायद", "ଜାଇଦ୍"),
                t("Rabi", "रबी", "ରବି"),
                t("plantation", "बागानी", "ବଗିଚା"),
            ],
            2,
        ),
        q(
            403,
            CropScience,
            Medium,
            25,
            t(
                "Which practice returns nitrogen to the soil?",
                "कौन-सी विधि मिट्टी में नाइट्रोजन लौटाती है?",
                "କେଉଁ ପଦ୍ଧତି ମାଟିକୁ ନାଇଟ୍ରୋଜେନ୍ ଫେରାଇଥାଏ?",
            ),
            vec![
                t("Burning stubble", "पराली जलाना", "ନଡ଼ା ପୋଡ଼ିବା"),
                t("Growing legumes", "दलहनी फसलें उगाना", "ଡାଲି ଜାତୀୟ ଫସଲ ଚାଷ"),
                t("Over-irrigation", "अधिक सिंचाई", "ଅଧିକ ଜଳସେଚନ"),
                t("Deep ploughing only", "केवल गहरी जुताई", "କେବଳ ଗଭୀର ହଳ"),
            ],
            1,
        ),
        q(
            404,
            CropScience,
            Medium,
            25,
            t(
                "Separating grain from chaff is called:",
                "भूसे से अनाज अलग करने की क्रिया कहलाती है:",
                "ଅଗାଡ଼ିରୁ ଶସ୍ୟ ଅଲଗା କରିବାକୁ କୁହାଯାଏ:",
            ),
            vec![
                t("Winnowing", "ओसाना", "ପାଛୁଡ଼ିବା"),
                t("Threshing", "गहाई", "ମଡ଼ାଇ"),
                t("Harvesting", "कटाई", "ଅମଳ"),
                t("Sowing", "बुआई", "ବୁଣିବା"),
            ],
            0,
        ),
        q(
            405,
            CropScience,
            Easy,
            20,
            t(
                "Which tool is used for sowing seeds in lines?",
                "पंक्तियों में बीज बोने के लिए कौन-सा यंत्र प्रयोग होता है?",
                "ଧାଡ଼ିରେ ବିହନ ବୁଣିବା ପାଇଁ କେଉଁ ଯନ୍ତ୍ର ବ୍ୟବହୃତ ହୁଏ?",
            ),
            vec![
                t("Sickle", "हँसिया", "ଦାଆ"),
                t("Plough", "हल", "ଲଙ୍ଗଳ"),
                t("Hoe", "खुरपी", "କୋଡ଼ି"),
                t("Seed drill", "सीड ड्रिल", "ସିଡ୍ ଡ୍ରିଲ୍"),
            ],
            3,
        ),
        q(
            406,
            CropScience,
            Easy,
            20,
            t(
                "Which of these is a natural fertiliser?",
                "इनमें से कौन-सा प्राकृतिक उर्वरक है?",
                "ଏଥି ମଧ୍ୟରୁ କେଉଁଟି ପ୍ରାକୃତିକ ସାର?",
            ),
            vec![
                t("Urea", "यूरिया", "ୟୁରିଆ"),
                t("NPK mix", "एनपीके मिश्रण", "ଏନ୍‌ପିକେ ମିଶ୍ରଣ"),
                t("Compost", "कम्पोस्ट", "କମ୍ପୋଷ୍ଟ"),
                t("DDT", "डीडीटी", "ଡିଡିଟି"),
            ],
            2,
        ),
    ]
}

fn nutrition_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::Nutrition;
    vec![
        q(
            501,
            Nutrition,
            Easy,
            20,
            t(
                "Which nutrient is the body's main source of energy?",
                "शरीर को ऊर्जा देने वाला मुख्य पोषक तत्व कौन-सा है?",
                "ଶରୀରକୁ ଶକ୍ତି ଦେଉଥିବା ମୁଖ୍ୟ ପୁଷ୍ଟିକର ତତ୍ତ୍ୱ କେଉଁଟି?",
            ),
            vec![
                t("Carbohydrates", "कार्बोहाइड्रेट", "କାର୍ବୋହାଇଡ୍ରେଟ୍"),
                t("Vitamins", "विटामिन", "ଭିଟାମିନ୍"),
                t("Minerals", "खनिज", "ଖଣିଜ"),
                t("Water", "जल", "ଜଳ"),
            ],
            0,
        ),
        q(
            502,
            Nutrition,
            Medium,
            25,
            t(
                "Deficiency of vitamin C causes:",
                "विटामिन C की कमी से होता है:",
                "ଭିଟାମିନ୍ C ଅଭାବରୁ ହୁଏ:",
            ),
            vec![
                t("Rickets", "रिकेट्स", "ରିକେଟ୍ସ"),
                t("Scurvy", "स्कर्वी", "ସ୍କର୍ଭି"),
                t("Anaemia", "एनीमिया", "ରକ୍ତହୀନତା"),
                t("Goitre", "घेंघा", "ଗଳଗଣ୍ଡ"),
            ],
            1,
        ),
        q(
            503,
            Nutrition,
            Easy,
            20,
            t(
                "Which food is rich in protein?",
                "इनमें से कौन-सा भोजन प्रोटीन से भरपूर है?",
                "ଏଥି ମଧ୍ୟରୁ କେଉଁ ଖାଦ୍ୟରେ ଅଧିକ ପ୍ରୋଟିନ୍ ଅଛି?",
            ),
            vec![
                t("Rice", "चावल", "ଭାତ"),
                t("Pulses", "दालें", "ଡାଲି"),
                t("Butter", "मक्खन", "ମାଖନ"),
                t("Sugar", "चीनी", "ଚିନି"),
            ],
            1,
        ),
        q(
            504,
            Nutrition,
            Medium,
            25,
            t(
                "Rickets is caused by a lack of vitamin:",
                "रिकेट्स किस विटामिन की कमी से होता है?",
                "ରିକେଟ୍ସ କେଉଁ ଭିଟାମିନ୍ ଅଭାବରୁ ହୁଏ?",
            ),
            vec![sym("A"), sym("B1"), sym("C"), sym("D")],
            3,
        ),
        q(
            505,
            Nutrition,
            Medium,
            25,
            t(
                "Iodine deficiency causes:",
                "आयोडीन की कमी से होता है:",
                "ଆୟୋଡ଼ିନ୍ ଅଭାବରୁ ହୁଏ:",
            ),
            vec![
                t("Goitre", "घेंघा", "ଗଳଗଣ୍ଡ"),
                t("Scurvy", "स्कर्वी", "ସ୍କର୍ଭି"),
                t("Night blindness", "रतौंधी", "ରାତିକଣା"),
                t("Beriberi", "बेरीबेरी", "ବେରିବେରି"),
            ],
            0,
        ),
        q(
            506,
            Nutrition,
            Easy,
            20,
            t(
                "Which mineral builds strong bones and teeth?",
                "कौन-सा खनिज हड्डियों और दाँतों को मज़बूत बनाता है?",
                "କେଉଁ ଖଣିଜ ହାଡ଼ ଓ ଦାନ୍ତକୁ ମଜବୁତ କରେ?",
            ),
            vec![
                t("Iron", "लोहा", "ଲୌହ"),
                t("Calcium", "कैल्शियम", "କ୍ୟାଲସିୟମ୍"),
                t("Sodium", "सोडियम", "ସୋଡିୟମ୍"),
                t("Potassium", "पोटैशियम", "ପୋଟାସିୟମ୍"),
            ],
            1,
        ),
    ]
}

fn plant_questions() -> Vec<Question> {
    use Difficulty::*;
    use Subject::PlantBiology;
    vec![
        q(
            601,
            PlantBiology,
            Easy,
            20,
            t(
                "Photosynthesis mainly takes place in the:",
                "प्रकाश संश्लेषण मुख्यतः पौधे के किस भाग में होता है?",
                "ଆଲୋକଶ୍ଳେଷଣ ମୁଖ୍ୟତଃ ଉଦ୍ଭିଦର କେଉଁ ଅଂଶରେ ହୁଏ?",
            ),
            vec![
                t("Root", "जड़", "ଚେର"),
                t("Stem", "तना", "କାଣ୍ଡ"),
                t("Leaf", "पत्ती", "ପତ୍ର"),
                t("Flower", "फूल", "ଫୁଲ"),
            ],
            2,
        ),
        q(
            602,
            PlantBiology,
            Easy,
            20,
            t(
                "Which gas do plants release during photosynthesis?",
                "प्रकाश संश्लेषण के दौरान पौधे कौन-सी गैस छोड़ते हैं?",
                "ଆଲୋକଶ୍ଳେଷଣ ସମୟରେ ଉଦ୍ଭିଦ କେଉଁ ଗ୍ୟାସ୍ ଛାଡ଼େ?",
            ),
            vec![
                t("Oxygen", "ऑक्सीजन", "ଅମ୍ଳଜାନ"),
                t("Carbon dioxide", "कार्बन डाइऑक्साइड", "ଅଙ୍ଗାରକାମ୍ଳ"),
                t("Nitrogen", "नाइट्रोजन", "ଯବକ୍ଷାରଜାନ"),
                t("Hydrogen", "हाइड्रोजन", "ଉଦଜାନ"),
            ],
            0,
        ),
        q(
            603,
            PlantBiology,
            Easy,
            20,
            t(
                "Which part of the plant absorbs water from the soil?",
                "पौधा मिट्टी से जल किस भाग से सोखता है?",
                "ଉଦ୍ଭିଦ ମାଟିରୁ ଜଳ କେଉଁ ଅଂଶ ଦ୍ୱାରା ଶୋଷେ?",
            ),
            vec![
                t("Leaves", "पत्तियाँ", "ପତ୍ର"),
                t("Flowers", "फूल", "ଫୁଲ"),
                t("Fruits", "फल", "ଫଳ"),
                t("Roots", "जड़ें", "ଚେର"),
            ],
            3,
        ),
        q(
            604,
            PlantBiology,
            Easy,
            20,
            t(
                "The green pigment in leaves is called:",
                "पत्तियों में पाया जाने वाला हरा वर्णक कहलाता है:",
                "ପତ୍ରରେ ଥିବା ସବୁଜ ରଙ୍ଗର ପଦାର୍ଥକୁ କୁହାଯାଏ:",
            ),
            vec![
                t("Chlorophyll", "क्लोरोफिल", "କ୍ଲୋରୋଫିଲ୍"),
                t("Haemoglobin", "हीमोग्लोबिन", "ହିମୋଗ୍ଲୋବିନ୍"),
                t("Carotene", "कैरोटीन", "କାରୋଟିନ୍"),
                t("Melanin", "मेलानिन", "ମେଲାନିନ୍"),
            ],
            0,
        ),
        q(
            605,
            PlantBiology,
            Medium,
            25,
            t(
                "Water moves up a plant through the:",
                "पौधे में जल ऊपर किसके द्वारा पहुँचता है?",
                "ଉଦ୍ଭିଦରେ ଜଳ ଉପରକୁ କାହା ଦ୍ୱାରା ଯାଏ?",
            ),
            vec![
                t("Phloem", "फ्लोएम", "ଫ୍ଲୋଏମ୍"),
                t("Xylem", "जाइलम", "ଜାଇଲେମ୍"),
                t("Stomata", "रंध्र", "ଷ୍ଟୋମାଟା"),
                t("Cuticle", "क्यूटिकल", "କ୍ୟୁଟିକଲ୍"),
            ],
            1,
        ),
        q(
            606,
            PlantBiology,
            Medium,
            25,
            t(
                "The male part of a flower is the:",
                "फूल का नर भाग कहलाता है:",
                "ଫୁଲର ପୁରୁଷ ଅଂଶକୁ କୁହାଯାଏ:",
            ),
            vec![
                t("Pistil", "स्त्रीकेसर", "ଗର୍ଭକେଶର"),
                t("Petal", "पंखुड़ी", "ପାଖୁଡ଼ା"),
                t("Stamen", "पुंकेसर", "ପୁଂକେଶର"),
                t("Sepal", "बाह्यदल", "ବୃତି"),
            ],
            2,
        ),
    ]
}
