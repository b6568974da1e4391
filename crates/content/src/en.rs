//! English text bundle.

use sensei_core::Locale;
use crate::bundle::{MonthlyContent as M, PurposeText, TextBundle};

const TB_KANA: &[&str] = &["Genki I", "Remembering the Kana"];
const TB_BASIC: &[&str] = &["Genki I", "Minna no Nihongo I"];
const TB_ELEMENTARY: &[&str] = &["Genki II", "Minna no Nihongo II"];
const TB_PRE_INTERMEDIATE: &[&str] = &["Tobira", "Quartet I"];
const TB_INTERMEDIATE: &[&str] = &["Quartet II", "Shin Kanzen Master N3"];
const TB_UPPER: &[&str] = &["Shin Kanzen Master N2", "NHK News Web Easy"];
const TB_ADVANCED: &[&str] = &["Shin Kanzen Master N1", "Aozora Bunko"];

const TB_BUSINESS_UPPER: &[&str] = &["Business Japanese Drills", "Shin Kanzen Master N2"];
const TB_BUSINESS_ADVANCED: &[&str] = &["BJT Business Japanese Test Guide", "Nikkei articles"];
const TB_TRAVEL_BASIC: &[&str] = &["Genki I", "Lonely Planet Japanese Phrasebook"];
const TB_CULTURE_UPPER: &[&str] = &["Shin Kanzen Master N2 Reading", "Japanese folk tales (graded readers)"];

pub static BUNDLE: TextBundle = TextBundle {
    locale: Locale::En,
    now: "Now",
    months_later: " mo",
    month_unit: " months",
    level_descriptions: [
        "Beginner: learning kana and first greetings",
        "Elementary: simple everyday conversations",
        "Intermediate: everyday Japanese at natural speed, slowly",
        "Upper intermediate: news, work and most conversations",
        "Advanced: nuanced, complex Japanese in most settings",
        "Near native: fluent in almost every situation",
    ],
    lesson_types: ["Grammar", "Vocabulary", "Conversation", "Reading", "Listening"],
    purposes: [
        // anime
        PurposeText {
            label: "Anime & Manga",
            description: "Enjoy anime, manga and games in the original Japanese",
            reason_beginner: "Listening and vocabulary come first so you can pick up the words characters actually say.",
            reason_advanced: "Listening stays high while reading grows, so you can follow fast dialogue and raw manga.",
            milestones: [
                "Recognize kana in anime title cards and credits",
                "Catch greetings and catchphrases without subtitles",
                "Follow simple dialogue in children's anime",
                "Understand everyday scenes with Japanese subtitles",
                "Read manga with a dictionary and follow most episodes",
                "Watch anime raw and join fan discussions in Japanese",
                "Enjoy light novels, variety shows and untranslated games",
            ],
            monthly: [
                M::new(
                    &["Hiragana and katakana", "Anime greetings"],
                    &["Read kana", "Introduce yourself"],
                    "Kana unlocks every title card and speech bubble, so it comes first.",
                    TB_KANA,
                    "Quiz me on ten hiragana using words from popular anime titles.",
                ),
                M::new(
                    &["Basic particles", "Polite and casual speech"],
                    &["Build simple sentences", "Spot casual sentence endings"],
                    "Anime speech is mostly casual; learning the polite forms first shows what gets dropped.",
                    TB_BASIC,
                    "Explain the difference between desu and da using lines from a slice-of-life anime.",
                ),
                M::new(
                    &["Te-form and verb groups", "Character speech styles"],
                    &["Describe actions", "Recognize character speech quirks"],
                    "Te-form appears in almost every line of dialogue, so it pays off immediately.",
                    TB_ELEMENTARY,
                    "Give me five anime-style sentences using te-form and ask me to translate them.",
                ),
                M::new(
                    &["Conditionals and volitional form", "Manga sound effects"],
                    &["Read furigana manga", "Follow plot dialogue"],
                    "Plot-driven scenes rely on if-then and let's-do patterns.",
                    TB_PRE_INTERMEDIATE,
                    "Show me a short manga-style dialogue with conditionals and quiz me on it.",
                ),
                M::new(
                    &["Casual contractions", "Kanji in manga without furigana"],
                    &["Understand fast dialogue", "Read manga with a dictionary"],
                    "Contractions like -chau and -nakya are what make native speed hard to follow.",
                    TB_INTERMEDIATE,
                    "Rewrite three sentences using casual contractions and explain each change.",
                ),
                M::new(
                    &["Slang and regional dialects", "Light novel prose"],
                    &["Watch without subtitles", "Post in fan communities"],
                    "Dialects and slang give characters their flavor and trip up textbook learners.",
                    TB_UPPER,
                    "Teach me five Kansai-ben expressions common in anime with examples.",
                ),
                M::new(
                    &["Literary style", "Wordplay and cultural references"],
                    &["Read novels", "Catch puns and parodies"],
                    "At this level the gap is nuance: references and jokes rather than grammar.",
                    TB_ADVANCED,
                    "Explain a Japanese pun from a comedy anime and why it is funny.",
                ),
            ],
        },
        // friends
        PurposeText {
            label: "Friends & Partner",
            description: "Talk naturally with Japanese friends or a partner",
            reason_beginner: "Conversation gets the largest share so you can start chatting early.",
            reason_advanced: "Conversation and listening dominate so you can keep up with natural, casual talk.",
            milestones: [
                "Greet friends and introduce yourself",
                "Exchange simple messages on LINE",
                "Chat about hobbies and weekend plans",
                "Hold a casual conversation over dinner",
                "Share feelings and opinions without switching to English",
                "Joke, tease and follow group conversations",
                "Talk about anything, including serious topics, with ease",
            ],
            monthly: [
                M::new(
                    &["Kana", "Greetings and self-introduction"],
                    &["Say hello and goodbye", "Give your name and country"],
                    "A warm greeting is the first thing friends hear from you.",
                    TB_KANA,
                    "Role-play meeting a Japanese friend for the first time and correct my greetings.",
                ),
                M::new(
                    &["Likes and dislikes", "Question words"],
                    &["Ask simple questions", "Talk about hobbies"],
                    "Questions keep a conversation going even with few words.",
                    TB_BASIC,
                    "Ask me ten questions about my hobbies in simple Japanese.",
                ),
                M::new(
                    &["Casual speech", "Making plans"],
                    &["Invite someone out", "Switch to casual speech"],
                    "Friends speak casually; staying polite too long creates distance.",
                    TB_ELEMENTARY,
                    "Help me write a casual LINE message inviting a friend to karaoke.",
                ),
                M::new(
                    &["Giving reasons", "Sentence-ending particles"],
                    &["Explain your opinion", "Sound natural with ne and yo"],
                    "Ending particles carry tone and make speech sound friendly.",
                    TB_PRE_INTERMEDIATE,
                    "Correct my use of ne and yo in five sentences I write to a friend.",
                ),
                M::new(
                    &["Emotions and empathy", "Storytelling"],
                    &["Share feelings", "Tell a story from your week"],
                    "Close friendships need the words for how you feel.",
                    TB_INTERMEDIATE,
                    "Let me tell you about my weekend and reply like a close Japanese friend.",
                ),
                M::new(
                    &["Slang and humor", "Group conversation"],
                    &["Follow fast group chat", "Make jokes"],
                    "Humor and slang are how friends bond in any language.",
                    TB_UPPER,
                    "Teach me five slang words young people use in Tokyo with examples.",
                ),
                M::new(
                    &["Serious discussions", "Family and relationships"],
                    &["Discuss values and plans", "Talk with a partner's family"],
                    "Deep topics and polite family talk are the last step to full comfort.",
                    TB_ADVANCED,
                    "Role-play meeting my partner's parents and point out anything too casual.",
                ),
            ],
        },
        // travel
        PurposeText {
            label: "Travel",
            description: "Get around Japan and enjoy trips in Japanese",
            reason_beginner: "Vocabulary and conversation lead so you can order, ask and buy from day one.",
            reason_advanced: "Conversation stays central, with more listening for announcements and local talk.",
            milestones: [
                "Read station signs written in kana",
                "Order food and buy tickets with set phrases",
                "Ask for directions and understand simple answers",
                "Check in at a ryokan and handle small problems",
                "Chat with locals and shop owners you meet",
                "Travel off the beaten track without English",
                "Enjoy regional dialects, local TV and deep conversations",
            ],
            monthly: [
                M::new(
                    &["Kana", "Travel survival phrases"],
                    &["Read signs in kana", "Say please and thank you"],
                    "Kana covers station names and menus, the first things you meet.",
                    TB_TRAVEL_BASIC,
                    "Teach me ten survival phrases for a first trip to Japan.",
                ),
                M::new(
                    &["Numbers and prices", "Ordering food"],
                    &["Order at a restaurant", "Understand prices"],
                    "Numbers and counters come up at every shop and ticket gate.",
                    TB_TRAVEL_BASIC,
                    "Role-play ordering ramen at a ticket-machine restaurant.",
                ),
                M::new(
                    &["Directions and transport", "Time expressions"],
                    &["Ask for directions", "Buy train tickets"],
                    "Getting from A to B is the backbone of any trip.",
                    TB_ELEMENTARY,
                    "Act as a station attendant and give me directions to my platform.",
                ),
                M::new(
                    &["Hotels and ryokan", "Polite requests"],
                    &["Check in and out", "Make polite requests"],
                    "Polite request forms solve most problems at hotels and shops.",
                    TB_PRE_INTERMEDIATE,
                    "Role-play checking into a ryokan and asking about dinner time.",
                ),
                M::new(
                    &["Small talk with locals", "Regional food"],
                    &["Chat with locals", "Ask for recommendations"],
                    "Locals share the best spots once you can make small talk.",
                    TB_INTERMEDIATE,
                    "Pretend to be a local in Kyoto and recommend places to me in Japanese.",
                ),
                M::new(
                    &["Announcements and emergencies", "Rural travel"],
                    &["Understand announcements", "Handle trouble alone"],
                    "Outside the cities, English support disappears.",
                    TB_UPPER,
                    "Read me a train delay announcement and quiz me on its meaning.",
                ),
                M::new(
                    &["Dialects", "Local history and culture"],
                    &["Follow regional speech", "Discuss local history"],
                    "Dialects and history turn a trip into real connection.",
                    TB_ADVANCED,
                    "Explain five differences between Hiroshima dialect and standard Japanese.",
                ),
            ],
        },
        // culture
        PurposeText {
            label: "Culture & History",
            description: "Explore Japanese culture, arts and history in depth",
            reason_beginner: "Grammar, vocabulary and reading share the load to prepare for written sources.",
            reason_advanced: "Reading takes the largest share so you can enjoy literature and historical texts.",
            milestones: [
                "Recognize kana and common kanji on shrines and temples",
                "Name seasonal festivals and traditional foods",
                "Read simple explanations at museums",
                "Follow documentaries with Japanese subtitles",
                "Read essays about tea ceremony, arts and customs",
                "Read modern literature with occasional lookups",
                "Enjoy classical texts and discuss history in depth",
            ],
            monthly: [
                M::new(
                    &["Kana", "Culture vocabulary"],
                    &["Read kana", "Know basic culture words"],
                    "Cultural sites are full of kana and simple kanji.",
                    TB_KANA,
                    "Teach me ten words related to shrines and temples with readings.",
                ),
                M::new(
                    &["First kanji", "Seasons and festivals"],
                    &["Read 100 kanji", "Talk about festivals"],
                    "Seasonal events anchor much of Japanese culture.",
                    TB_BASIC,
                    "Describe the main festivals of each season in simple Japanese.",
                ),
                M::new(
                    &["Descriptions and comparisons", "Traditional arts"],
                    &["Describe objects", "Compare customs"],
                    "Describing and comparing lets you talk about what you see.",
                    TB_ELEMENTARY,
                    "Help me compare a tea ceremony with tea culture in my country.",
                ),
                M::new(
                    &["Passive voice", "Historical figures"],
                    &["Read museum panels", "Summarize a short text"],
                    "Historical writing leans heavily on passive forms.",
                    TB_PRE_INTERMEDIATE,
                    "Give me a short passage about Oda Nobunaga and quiz me on it.",
                ),
                M::new(
                    &["Written style", "Essays on customs"],
                    &["Read essays", "Write short summaries"],
                    "Essays use the written style you will meet in every serious source.",
                    TB_INTERMEDIATE,
                    "Give me an essay excerpt about wabi-sabi and ask me to summarize it.",
                ),
                M::new(
                    &["Modern literature", "Documentaries"],
                    &["Read short stories", "Follow documentaries"],
                    "Literature shows culture from the inside.",
                    TB_CULTURE_UPPER,
                    "Recommend a short story by Akutagawa and explain its cultural background.",
                ),
                M::new(
                    &["Classical Japanese basics", "Historical texts"],
                    &["Read classical excerpts", "Debate history"],
                    "Classical grammar opens poetry and historical records.",
                    TB_ADVANCED,
                    "Explain the grammar of one poem from the Hyakunin Isshu.",
                ),
            ],
        },
        // live
        PurposeText {
            label: "Living in Japan",
            description: "Handle daily life, paperwork and neighbors in Japan",
            reason_beginner: "A balanced mix so you can cope with shops, forms and neighbors early on.",
            reason_advanced: "Balanced skills with more reading and listening for paperwork and local life.",
            milestones: [
                "Read kana on shop signs and product labels",
                "Shop, pay and take trains on your own",
                "Handle city hall and bank counters with help",
                "See a doctor and explain symptoms",
                "Deal with landlords, schools and neighbors",
                "Read official letters and contracts",
                "Take part in community life like a local",
            ],
            monthly: [
                M::new(
                    &["Kana", "Daily life phrases"],
                    &["Read labels", "Greet neighbors"],
                    "Labels and signs are everywhere from day one.",
                    TB_KANA,
                    "Teach me phrases for greeting new neighbors in Japan.",
                ),
                M::new(
                    &["Shopping and counters", "Numbers and dates"],
                    &["Shop alone", "Understand dates on forms"],
                    "Counters and dates appear in every shop and document.",
                    TB_BASIC,
                    "Quiz me on Japanese counters used at the supermarket.",
                ),
                M::new(
                    &["City hall and bank", "Forms"],
                    &["Fill simple forms", "Ask for help at counters"],
                    "Residence paperwork is unavoidable in the first months.",
                    TB_ELEMENTARY,
                    "Role-play registering my address at city hall.",
                ),
                M::new(
                    &["Health and hospitals", "Body and symptoms"],
                    &["Explain symptoms", "Understand instructions"],
                    "Being able to explain a symptom matters more than perfect grammar.",
                    TB_PRE_INTERMEDIATE,
                    "Act as a clinic receptionist and ask me about my symptoms.",
                ),
                M::new(
                    &["Housing and neighbors", "Garbage rules"],
                    &["Talk to a landlord", "Follow local rules"],
                    "Housing issues and local rules shape daily life.",
                    TB_INTERMEDIATE,
                    "Explain my city's garbage sorting rules in simple Japanese.",
                ),
                M::new(
                    &["Official documents", "Contracts"],
                    &["Read official letters", "Understand contracts"],
                    "Official letters use formal kanji-heavy language.",
                    TB_UPPER,
                    "Help me read a tax notice and explain the key terms.",
                ),
                M::new(
                    &["Community and PTA", "Formal speech"],
                    &["Join community meetings", "Speak formally"],
                    "Community roles call for polished, formal Japanese.",
                    TB_ADVANCED,
                    "Role-play a neighborhood association meeting and correct my keigo.",
                ),
            ],
        },
        // work
        PurposeText {
            label: "Work & Career",
            description: "Use Japanese at work or land a job in Japan",
            reason_beginner: "Grammar takes the lead to build the accuracy that business Japanese demands.",
            reason_advanced: "Conversation grows for meetings while grammar stays strong for keigo and writing.",
            milestones: [
                "Read kana and introduce your job",
                "Greet colleagues and make polite small talk",
                "Write simple business emails with templates",
                "Join meetings and follow the main points",
                "Use keigo with clients and superiors",
                "Lead meetings and negotiate in Japanese",
                "Work fully in Japanese, including formal writing",
            ],
            monthly: [
                M::new(
                    &["Kana", "Business greetings"],
                    &["Read kana", "Introduce your job"],
                    "First impressions at work depend on correct greetings.",
                    TB_KANA,
                    "Teach me the standard self-introduction for a first day at a Japanese office.",
                ),
                M::new(
                    &["Polite form", "Office vocabulary"],
                    &["Speak politely", "Name office items and roles"],
                    "Polite forms are the default at work.",
                    TB_BASIC,
                    "Quiz me on ten office vocabulary words in polite sentences.",
                ),
                M::new(
                    &["Email templates", "Requests and permission"],
                    &["Write simple emails", "Ask for permission"],
                    "Email is where Japanese business etiquette is most visible.",
                    TB_ELEMENTARY,
                    "Help me write a polite email asking to reschedule a meeting.",
                ),
                M::new(
                    &["Keigo basics", "Phone calls"],
                    &["Use respectful forms", "Answer the phone"],
                    "Keigo is required the moment you speak with clients.",
                    TB_PRE_INTERMEDIATE,
                    "Role-play answering a business phone call and correct my keigo.",
                ),
                M::new(
                    &["Meetings", "Reports"],
                    &["Follow meetings", "Write short reports"],
                    "Meetings move fast and use set expressions.",
                    TB_INTERMEDIATE,
                    "Give me phrases for agreeing and disagreeing politely in meetings.",
                ),
                M::new(
                    &["Negotiation", "Presentations"],
                    &["Present ideas", "Negotiate terms"],
                    "Presenting and negotiating are where careers move forward.",
                    TB_BUSINESS_UPPER,
                    "Role-play a price negotiation with a Japanese client.",
                ),
                M::new(
                    &["Formal documents", "Industry terminology"],
                    &["Write proposals", "Handle any business situation"],
                    "Formal writing and terminology complete professional fluency.",
                    TB_BUSINESS_ADVANCED,
                    "Review my business proposal summary and make it more formal.",
                ),
            ],
        },
        // beauty
        PurposeText {
            label: "Self-improvement",
            description: "Learn Japanese for personal growth and lifestyle",
            reason_beginner: "Vocabulary and reading lead so you can enjoy magazines, blogs and products.",
            reason_advanced: "Reading and vocabulary stay strong for lifestyle media and personal study.",
            milestones: [
                "Read kana on cosmetics and lifestyle products",
                "Understand simple product descriptions",
                "Follow lifestyle blogs with a dictionary",
                "Watch lifestyle videos with Japanese subtitles",
                "Read magazines and reviews comfortably",
                "Create your own content in Japanese",
                "Enjoy any lifestyle media and share opinions fluently",
            ],
            monthly: [
                M::new(
                    &["Kana", "Lifestyle vocabulary"],
                    &["Read kana labels", "Know everyday words"],
                    "Product labels are a fun first reading practice.",
                    TB_KANA,
                    "Teach me ten words found on Japanese skincare products.",
                ),
                M::new(
                    &["Adjectives", "Routines"],
                    &["Describe things", "Talk about your routine"],
                    "Adjectives describe everything you like.",
                    TB_BASIC,
                    "Help me describe my morning routine in simple Japanese.",
                ),
                M::new(
                    &["Product descriptions", "Recommendations"],
                    &["Read product pages", "Give recommendations"],
                    "Descriptions and recommendations use the same patterns.",
                    TB_ELEMENTARY,
                    "Write a short product review and ask me to correct it.",
                ),
                M::new(
                    &["Blogs and social media", "Casual writing"],
                    &["Read blogs", "Write short posts"],
                    "Blogs and posts are short, frequent and motivating.",
                    TB_PRE_INTERMEDIATE,
                    "Help me write an Instagram caption about my favorite café.",
                ),
                M::new(
                    &["Magazines", "Reviews"],
                    &["Read magazines", "Compare opinions"],
                    "Magazines mix trends with rich vocabulary.",
                    TB_INTERMEDIATE,
                    "Summarize a magazine article about wellness trends and quiz me.",
                ),
                M::new(
                    &["Content creation", "Expressing opinions"],
                    &["Write longer posts", "Share opinions"],
                    "Creating content turns passive knowledge into active skill.",
                    TB_UPPER,
                    "Edit my short blog post so it sounds natural.",
                ),
                M::new(
                    &["Nuanced expressions", "Essays"],
                    &["Write essays", "Express subtle feelings"],
                    "Subtle expressions are what make your writing sound like you.",
                    TB_ADVANCED,
                    "Suggest more nuanced ways to express satisfaction in Japanese.",
                ),
            ],
        },
        // challenge
        PurposeText {
            label: "Challenge",
            description: "Take on Japanese as a personal challenge or for the JLPT",
            reason_beginner: "An even foundation across grammar and vocabulary, as tested by the JLPT.",
            reason_advanced: "A fully balanced split mirrors the sections of the JLPT.",
            milestones: [
                "Master both kana sets",
                "Pass an N5-level mock test",
                "Pass an N4-level mock test",
                "Reach the N3 pass line on mock tests",
                "Pass an N3 test with a comfortable margin",
                "Reach the N2 pass line on mock tests",
                "Take on the N1 with confidence",
            ],
            monthly: [
                M::new(
                    &["Kana", "Study habits"],
                    &["Read and write kana", "Study daily"],
                    "A daily habit is the foundation of any challenge.",
                    TB_KANA,
                    "Make me a 30-day kana study plan with daily goals.",
                ),
                M::new(
                    &["N5 grammar", "N5 vocabulary"],
                    &["Answer N5 questions", "Read 100 kanji"],
                    "N5 material is the shortest path to a first success.",
                    TB_BASIC,
                    "Give me five N5-style grammar questions with explanations.",
                ),
                M::new(
                    &["N4 grammar", "Kanji practice"],
                    &["Answer N4 questions", "Read 300 kanji"],
                    "N4 completes beginner grammar.",
                    TB_ELEMENTARY,
                    "Give me an N4-style reading question and check my answer.",
                ),
                M::new(
                    &["N3 grammar", "Reading speed"],
                    &["Read short passages", "Manage test time"],
                    "N3 adds longer texts, so speed starts to matter.",
                    TB_PRE_INTERMEDIATE,
                    "Time me on an N3-style reading passage and review my mistakes.",
                ),
                M::new(
                    &["N3 review", "Listening practice"],
                    &["Pass N3 mock tests", "Follow test audio"],
                    "Listening is where most N3 candidates lose points.",
                    TB_INTERMEDIATE,
                    "Give me an N3-style listening script and questions.",
                ),
                M::new(
                    &["N2 grammar", "Newspaper reading"],
                    &["Read news articles", "Pass N2 mock tests"],
                    "N2 reading is close to real newspapers.",
                    TB_UPPER,
                    "Explain five N2 grammar points that are easy to confuse.",
                ),
                M::new(
                    &["N1 grammar", "Abstract texts"],
                    &["Read editorials", "Pass N1 mock tests"],
                    "N1 tests abstract, formal Japanese.",
                    TB_ADVANCED,
                    "Give me an N1-level editorial excerpt and ask about the author's claim.",
                ),
            ],
        },
        // other
        PurposeText {
            label: "Other",
            description: "A well-rounded plan for any goal",
            reason_beginner: "A balanced start with grammar and vocabulary building the base.",
            reason_advanced: "Conversation grows as the base is in place, with reading and listening close behind.",
            milestones: [
                "Read both kana sets",
                "Handle greetings and simple questions",
                "Talk about your daily life",
                "Hold everyday conversations",
                "Follow TV and read simple articles",
                "Use Japanese comfortably at work or school",
                "Communicate freely in almost any situation",
            ],
            monthly: [
                M::new(
                    &["Kana", "Greetings"],
                    &["Read kana", "Greet people"],
                    "Kana and greetings are the base of every path.",
                    TB_KANA,
                    "Quiz me on hiragana and basic greetings.",
                ),
                M::new(
                    &["Basic grammar", "Everyday vocabulary"],
                    &["Make simple sentences", "Ask simple questions"],
                    "Core grammar lets you combine words into meaning.",
                    TB_BASIC,
                    "Give me ten simple sentences to translate into Japanese.",
                ),
                M::new(
                    &["Verb forms", "Daily life topics"],
                    &["Talk about your day", "Describe plans"],
                    "Verb forms unlock past, present and future.",
                    TB_ELEMENTARY,
                    "Ask me about my day and correct my verb forms.",
                ),
                M::new(
                    &["Intermediate grammar", "Conversation strategies"],
                    &["Hold conversations", "Explain reasons"],
                    "Intermediate grammar turns short answers into real conversation.",
                    TB_PRE_INTERMEDIATE,
                    "Have a five-minute conversation with me about travel plans.",
                ),
                M::new(
                    &["Reading articles", "Natural listening"],
                    &["Read simple articles", "Follow TV"],
                    "Authentic material bridges textbook and real Japanese.",
                    TB_INTERMEDIATE,
                    "Give me a short news article in easy Japanese and quiz me.",
                ),
                M::new(
                    &["Formal and casual registers", "Writing"],
                    &["Switch registers", "Write longer texts"],
                    "Choosing the right register is the mark of an upper intermediate speaker.",
                    TB_UPPER,
                    "Rewrite my casual paragraph in formal Japanese.",
                ),
                M::new(
                    &["Nuance", "Advanced reading"],
                    &["Express nuance", "Read anything"],
                    "Advanced study is about nuance and breadth.",
                    TB_ADVANCED,
                    "Explain the nuance between three similar Japanese expressions.",
                ),
            ],
        },
    ],
};
