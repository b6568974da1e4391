//! Japanese text bundle.

use sensei_core::Locale;
use crate::bundle::{MonthlyContent as M, PurposeText, TextBundle};

const TB_KANA: &[&str] = &["げんき I", "かなマスター"];
const TB_BASIC: &[&str] = &["げんき I", "みんなの日本語 初級I"];
const TB_ELEMENTARY: &[&str] = &["げんき II", "みんなの日本語 初級II"];
const TB_PRE_INTERMEDIATE: &[&str] = &["とびら", "Quartet I"];
const TB_INTERMEDIATE: &[&str] = &["Quartet II", "新完全マスター N3"];
const TB_UPPER: &[&str] = &["新完全マスター N2", "NHK NEWS WEB EASY"];
const TB_ADVANCED: &[&str] = &["新完全マスター N1", "青空文庫"];

const TB_BUSINESS_UPPER: &[&str] = &["ビジネス日本語ドリル", "新完全マスター N2"];
const TB_BUSINESS_ADVANCED: &[&str] = &["BJTビジネス日本語能力テスト 公式ガイド", "日経新聞"];
const TB_TRAVEL_BASIC: &[&str] = &["げんき I", "旅の指さし会話帳"];
const TB_CULTURE_UPPER: &[&str] = &["新完全マスター N2 読解", "日本昔話（多読ライブラリー）"];

pub static BUNDLE: TextBundle = TextBundle {
    locale: Locale::Ja,
    now: "現在",
    months_later: "ヶ月後",
    month_unit: "ヶ月",
    level_descriptions: [
        "入門：ひらがな・カタカナと簡単なあいさつ",
        "初級：身近な話題の簡単な会話ができる",
        "中級：日常的な日本語をある程度理解できる",
        "中上級：ニュースや仕事の会話がほぼわかる",
        "上級：幅広い場面で複雑な日本語を理解できる",
        "ネイティブレベル：ほぼすべての場面で流暢",
    ],
    lesson_types: ["文法", "語彙", "会話", "読解", "聴解"],
    purposes: [
        // anime
        PurposeText {
            label: "アニメ・漫画",
            description: "アニメや漫画、ゲームを日本語のまま楽しみたい",
            reason_beginner: "キャラクターのセリフを聞き取れるよう、聴解と語彙を優先します。",
            reason_advanced: "速いセリフや生の漫画に対応するため、聴解を保ちつつ読解を増やします。",
            milestones: [
                "アニメのタイトルやクレジットのかなが読める",
                "字幕なしであいさつや決めゼリフが聞き取れる",
                "子ども向けアニメの簡単な会話についていける",
                "日本語字幕で日常シーンが理解できる",
                "辞書を使って漫画が読め、ほとんどの話についていける",
                "字幕なしでアニメを観て、ファン同士で日本語で語り合える",
                "ライトノベルやバラエティ番組、未翻訳のゲームを楽しめる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "アニメのあいさつ"],
                    &["かなが読める", "自己紹介ができる"],
                    "タイトルも吹き出しもかなから。まずは文字を固めます。",
                    TB_KANA,
                    "人気アニメのタイトルに出てくる言葉で、ひらがなを10個クイズしてください。",
                ),
                M::new(
                    &["基本の助詞", "丁寧語と普通体"],
                    &["簡単な文が作れる", "くだけた文末に気づける"],
                    "アニメは普通体が中心。先に丁寧形を知ると省略が見えてきます。",
                    TB_BASIC,
                    "日常系アニメのセリフを使って「です」と「だ」の違いを説明してください。",
                ),
                M::new(
                    &["て形と動詞のグループ", "キャラクターの話し方"],
                    &["動作を説明できる", "話し方の特徴がわかる"],
                    "て形はほとんどのセリフに出てくるので、すぐに役立ちます。",
                    TB_ELEMENTARY,
                    "て形を使ったアニメ風の文を5つ出して、私に訳させてください。",
                ),
                M::new(
                    &["条件形・意向形", "漫画の擬音語"],
                    &["ふりがな付き漫画が読める", "ストーリーの会話についていける"],
                    "物語の展開は「〜たら」「〜よう」の表現が支えています。",
                    TB_PRE_INTERMEDIATE,
                    "条件形を使った漫画風の短い会話を作り、内容をクイズしてください。",
                ),
                M::new(
                    &["会話の縮約形", "ふりがなのない漢字"],
                    &["速い会話が理解できる", "辞書で漫画が読める"],
                    "「〜ちゃう」「〜なきゃ」などの縮約が速さの壁になります。",
                    TB_INTERMEDIATE,
                    "3つの文を縮約形に書き換えて、それぞれの変化を説明してください。",
                ),
                M::new(
                    &["スラング・方言", "ライトノベルの文体"],
                    &["字幕なしで観られる", "ファンコミュニティに投稿できる"],
                    "方言やスラングがキャラクターの個性を作っています。",
                    TB_UPPER,
                    "アニメでよく使われる関西弁を5つ、例文付きで教えてください。",
                ),
                M::new(
                    &["文学的な表現", "言葉遊びとパロディ"],
                    &["小説が読める", "ダジャレやパロディがわかる"],
                    "このレベルでは文法よりも、ネタや言葉遊びの理解が差になります。",
                    TB_ADVANCED,
                    "ギャグアニメのダジャレを1つ取り上げて、なぜ面白いのか説明してください。",
                ),
            ],
        },
        // friends
        PurposeText {
            label: "友達・恋人",
            description: "日本人の友達やパートナーと自然に話したい",
            reason_beginner: "早くおしゃべりを始められるよう、会話の比率を最も高くしています。",
            reason_advanced: "自然でくだけた会話についていけるよう、会話と聴解を中心にしています。",
            milestones: [
                "友達にあいさつして自己紹介できる",
                "LINEで簡単なメッセージをやりとりできる",
                "趣味や週末の予定について話せる",
                "食事をしながら気軽に会話できる",
                "英語に頼らず気持ちや意見を伝えられる",
                "冗談を言い合い、グループの会話についていける",
                "真剣な話題も含めて何でも気楽に話せる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "あいさつと自己紹介"],
                    &["あいさつができる", "名前と出身を言える"],
                    "最初に届くのはあいさつ。温かいひと言から始めます。",
                    TB_KANA,
                    "日本人の友達に初めて会う場面をロールプレイして、あいさつを直してください。",
                ),
                M::new(
                    &["好き・嫌い", "疑問詞"],
                    &["簡単な質問ができる", "趣味について話せる"],
                    "質問ができれば、少ない言葉でも会話が続きます。",
                    TB_BASIC,
                    "私の趣味について、簡単な日本語で10個質問してください。",
                ),
                M::new(
                    &["普通体の会話", "予定を立てる"],
                    &["誘うことができる", "タメ口に切り替えられる"],
                    "友達同士は普通体。丁寧すぎると距離ができてしまいます。",
                    TB_ELEMENTARY,
                    "友達をカラオケに誘うLINEのメッセージを一緒に書いてください。",
                ),
                M::new(
                    &["理由を言う", "終助詞"],
                    &["意見を説明できる", "「ね」「よ」で自然に話せる"],
                    "終助詞が話し方のトーンと親しみを作ります。",
                    TB_PRE_INTERMEDIATE,
                    "友達に送る5つの文で「ね」と「よ」の使い方を直してください。",
                ),
                M::new(
                    &["感情と共感", "出来事を話す"],
                    &["気持ちを伝えられる", "1週間の出来事を話せる"],
                    "親しい関係には、気持ちを表す言葉が欠かせません。",
                    TB_INTERMEDIATE,
                    "週末の話をするので、親しい日本人の友達のように返事してください。",
                ),
                M::new(
                    &["スラングとユーモア", "グループでの会話"],
                    &["速いグループチャットについていける", "冗談が言える"],
                    "どの言語でも、ユーモアとスラングが友情を深めます。",
                    TB_UPPER,
                    "東京の若者がよく使うスラングを5つ、例文付きで教えてください。",
                ),
                M::new(
                    &["真剣な話し合い", "家族と人間関係"],
                    &["価値観や将来を話せる", "パートナーの家族と話せる"],
                    "深い話題と家族への丁寧な言葉づかいが最後のステップです。",
                    TB_ADVANCED,
                    "パートナーの両親に会う場面をロールプレイし、くだけすぎた表現を指摘してください。",
                ),
            ],
        },
        // travel
        PurposeText {
            label: "旅行",
            description: "日本語で旅行を楽しみ、自由に移動したい",
            reason_beginner: "初日から注文・質問・買い物ができるよう、語彙と会話を優先します。",
            reason_advanced: "会話を中心にしつつ、アナウンスや地元の会話のために聴解を増やします。",
            milestones: [
                "駅の案内のかなが読める",
                "決まった表現で注文やきっぷの購入ができる",
                "道を尋ねて簡単な答えが理解できる",
                "旅館にチェックインし、小さなトラブルに対応できる",
                "出会った地元の人やお店の人と雑談できる",
                "英語なしで観光地以外も旅行できる",
                "方言や地元のテレビ、深い会話を楽しめる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "旅行のサバイバル表現"],
                    &["かなの看板が読める", "お願いとお礼が言える"],
                    "駅名やメニューなど、最初に出会う文字はかなです。",
                    TB_TRAVEL_BASIC,
                    "初めての日本旅行で使えるサバイバル表現を10個教えてください。",
                ),
                M::new(
                    &["数字と値段", "食事の注文"],
                    &["レストランで注文できる", "値段がわかる"],
                    "数字と助数詞はお店や改札で毎回出てきます。",
                    TB_TRAVEL_BASIC,
                    "食券機のあるラーメン屋で注文する場面をロールプレイしてください。",
                ),
                M::new(
                    &["道案内と交通", "時間の表現"],
                    &["道を尋ねられる", "電車のきっぷが買える"],
                    "目的地まで移動できることが旅の基本です。",
                    TB_ELEMENTARY,
                    "駅員になって、私のホームまでの行き方を案内してください。",
                ),
                M::new(
                    &["ホテル・旅館", "丁寧な依頼"],
                    &["チェックイン・アウトができる", "丁寧にお願いできる"],
                    "丁寧な依頼表現でホテルやお店の問題はほぼ解決できます。",
                    TB_PRE_INTERMEDIATE,
                    "旅館にチェックインして夕食の時間を尋ねる場面をロールプレイしてください。",
                ),
                M::new(
                    &["地元の人との雑談", "ご当地グルメ"],
                    &["地元の人と話せる", "おすすめを聞ける"],
                    "雑談ができると、地元の人がとっておきの場所を教えてくれます。",
                    TB_INTERMEDIATE,
                    "京都の地元の人になって、日本語でおすすめの場所を教えてください。",
                ),
                M::new(
                    &["アナウンスと緊急時", "地方の旅"],
                    &["アナウンスが理解できる", "一人でトラブルに対応できる"],
                    "都市部を離れると英語のサポートはほとんどありません。",
                    TB_UPPER,
                    "電車の遅延アナウンスを読み上げて、内容をクイズしてください。",
                ),
                M::new(
                    &["方言", "地域の歴史と文化"],
                    &["方言についていける", "土地の歴史を語れる"],
                    "方言と歴史が、旅を本当の交流に変えてくれます。",
                    TB_ADVANCED,
                    "広島弁と標準語の違いを5つ説明してください。",
                ),
            ],
        },
        // culture
        PurposeText {
            label: "文化・歴史",
            description: "日本の文化や芸術、歴史を深く知りたい",
            reason_beginner: "書かれた資料に備えて、文法・語彙・読解をバランスよく進めます。",
            reason_advanced: "文学や歴史の文章を楽しめるよう、読解の比率を最も高くしています。",
            milestones: [
                "神社やお寺のかなとよく使う漢字がわかる",
                "季節の行事や伝統的な食べ物の名前が言える",
                "博物館の簡単な説明が読める",
                "日本語字幕でドキュメンタリーを観られる",
                "茶道や芸術、風習についてのエッセイが読める",
                "ときどき辞書を引きながら近代文学が読める",
                "古典を楽しみ、歴史について深く語れる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "文化の語彙"],
                    &["かなが読める", "文化の基本語彙がわかる"],
                    "文化的な場所は、かなと簡単な漢字であふれています。",
                    TB_KANA,
                    "神社やお寺に関する言葉を、読み方付きで10個教えてください。",
                ),
                M::new(
                    &["最初の漢字", "季節と行事"],
                    &["漢字を100字読める", "行事について話せる"],
                    "季節の行事は日本文化の土台になっています。",
                    TB_BASIC,
                    "季節ごとの主な行事を簡単な日本語で説明してください。",
                ),
                M::new(
                    &["描写と比較", "伝統芸能"],
                    &["ものを描写できる", "習慣を比べられる"],
                    "描写と比較ができると、見たものについて話せます。",
                    TB_ELEMENTARY,
                    "茶道と私の国のお茶文化を比べる文を一緒に作ってください。",
                ),
                M::new(
                    &["受身形", "歴史上の人物"],
                    &["博物館の説明が読める", "短い文章を要約できる"],
                    "歴史の文章では受身形が多く使われます。",
                    TB_PRE_INTERMEDIATE,
                    "織田信長についての短い文章を出して、内容をクイズしてください。",
                ),
                M::new(
                    &["書き言葉", "風習についてのエッセイ"],
                    &["エッセイが読める", "短い要約が書ける"],
                    "本格的な資料はすべて書き言葉で書かれています。",
                    TB_INTERMEDIATE,
                    "わびさびについてのエッセイの一部を出して、要約させてください。",
                ),
                M::new(
                    &["近代文学", "ドキュメンタリー"],
                    &["短編小説が読める", "ドキュメンタリーについていける"],
                    "文学は文化を内側から見せてくれます。",
                    TB_CULTURE_UPPER,
                    "芥川龍之介の短編を1つ薦めて、その文化的背景を説明してください。",
                ),
                M::new(
                    &["古文の基礎", "歴史資料"],
                    &["古典の一節が読める", "歴史について議論できる"],
                    "古文の文法が和歌や歴史資料への扉を開きます。",
                    TB_ADVANCED,
                    "百人一首から1首選んで、その文法を説明してください。",
                ),
            ],
        },
        // live
        PurposeText {
            label: "日本で暮らす",
            description: "日本での生活や手続き、近所づきあいをこなしたい",
            reason_beginner: "お店や書類、近所づきあいに早く対応できるよう、バランスよく学びます。",
            reason_advanced: "バランスを保ちつつ、書類や地域の生活のために読解と聴解を増やします。",
            milestones: [
                "お店の看板や商品ラベルのかなが読める",
                "一人で買い物や支払い、電車の利用ができる",
                "手伝ってもらいながら役所や銀行の窓口で手続きできる",
                "病院で症状を説明できる",
                "大家さんや学校、近所の人とやりとりできる",
                "役所からの手紙や契約書が読める",
                "地域の一員として生活に参加できる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "生活の表現"],
                    &["ラベルが読める", "近所の人にあいさつできる"],
                    "看板やラベルは初日から身の回りにあります。",
                    TB_KANA,
                    "引っ越しのあいさつで近所の人に使う表現を教えてください。",
                ),
                M::new(
                    &["買い物と助数詞", "数字と日付"],
                    &["一人で買い物ができる", "書類の日付がわかる"],
                    "助数詞と日付は、お店でも書類でも必ず出てきます。",
                    TB_BASIC,
                    "スーパーで使う助数詞をクイズしてください。",
                ),
                M::new(
                    &["役所と銀行", "書類の記入"],
                    &["簡単な書類が書ける", "窓口で助けを求められる"],
                    "最初の数か月は、在留関係の手続きが避けられません。",
                    TB_ELEMENTARY,
                    "役所で転入届を出す場面をロールプレイしてください。",
                ),
                M::new(
                    &["健康と病院", "体と症状"],
                    &["症状を説明できる", "指示が理解できる"],
                    "完璧な文法より、症状を伝えられることが大切です。",
                    TB_PRE_INTERMEDIATE,
                    "クリニックの受付になって、私の症状について質問してください。",
                ),
                M::new(
                    &["住まいと近所づきあい", "ごみの出し方"],
                    &["大家さんと話せる", "地域のルールを守れる"],
                    "住まいの問題と地域のルールが日々の生活を左右します。",
                    TB_INTERMEDIATE,
                    "私の市のごみの分別ルールを簡単な日本語で説明してください。",
                ),
                M::new(
                    &["公的な書類", "契約"],
                    &["役所の手紙が読める", "契約内容がわかる"],
                    "公的な手紙は、漢字の多いかたい言葉で書かれています。",
                    TB_UPPER,
                    "税金の通知書を読むのを手伝って、大事な用語を説明してください。",
                ),
                M::new(
                    &["町内会・PTA", "改まった話し方"],
                    &["地域の会合に参加できる", "改まった場で話せる"],
                    "地域の役割には、きちんとした敬語が求められます。",
                    TB_ADVANCED,
                    "町内会の会合をロールプレイして、私の敬語を直してください。",
                ),
            ],
        },
        // work
        PurposeText {
            label: "仕事・キャリア",
            description: "仕事で日本語を使いたい・日本で就職したい",
            reason_beginner: "ビジネス日本語に必要な正確さを身につけるため、文法を中心にしています。",
            reason_advanced: "会議に備えて会話を増やしつつ、敬語と文書のために文法も維持します。",
            milestones: [
                "かなが読め、自分の仕事を紹介できる",
                "同僚にあいさつし、丁寧に雑談できる",
                "テンプレートを使って簡単なビジネスメールが書ける",
                "会議に参加して要点がつかめる",
                "取引先や上司に敬語が使える",
                "日本語で会議を進め、交渉ができる",
                "正式な文書も含めて、仕事をすべて日本語でこなせる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "ビジネスのあいさつ"],
                    &["かなが読める", "仕事の紹介ができる"],
                    "職場の第一印象は正しいあいさつで決まります。",
                    TB_KANA,
                    "日本の会社の初出勤で使う自己紹介の型を教えてください。",
                ),
                M::new(
                    &["丁寧形", "オフィスの語彙"],
                    &["丁寧に話せる", "職場のものや役職が言える"],
                    "職場では丁寧形が基本です。",
                    TB_BASIC,
                    "オフィスの語彙を10個、丁寧な文でクイズしてください。",
                ),
                M::new(
                    &["メールの型", "依頼と許可"],
                    &["簡単なメールが書ける", "許可を求められる"],
                    "ビジネスマナーが最もよく表れるのがメールです。",
                    TB_ELEMENTARY,
                    "会議の日程変更をお願いする丁寧なメールを一緒に書いてください。",
                ),
                M::new(
                    &["敬語の基礎", "電話応対"],
                    &["尊敬語・謙譲語が使える", "電話に出られる"],
                    "取引先と話すときから敬語が必要になります。",
                    TB_PRE_INTERMEDIATE,
                    "会社の電話に出る場面をロールプレイして、敬語を直してください。",
                ),
                M::new(
                    &["会議", "報告書"],
                    &["会議についていける", "短い報告書が書ける"],
                    "会議は速く進み、決まった表現が多く使われます。",
                    TB_INTERMEDIATE,
                    "会議で丁寧に賛成・反対するときの表現を教えてください。",
                ),
                M::new(
                    &["交渉", "プレゼンテーション"],
                    &["アイデアを発表できる", "条件を交渉できる"],
                    "発表と交渉がキャリアを前に進めます。",
                    TB_BUSINESS_UPPER,
                    "日本の取引先との価格交渉をロールプレイしてください。",
                ),
                M::new(
                    &["正式な文書", "業界用語"],
                    &["企画書が書ける", "どんな業務にも対応できる"],
                    "正式な文書と専門用語で、仕事の日本語が完成します。",
                    TB_BUSINESS_ADVANCED,
                    "私の企画書の要約を確認して、よりかたい表現にしてください。",
                ),
            ],
        },
        // beauty
        PurposeText {
            label: "自分磨き",
            description: "自分の成長やライフスタイルのために学びたい",
            reason_beginner: "雑誌やブログ、商品を楽しめるよう、語彙と読解を優先します。",
            reason_advanced: "ライフスタイル系のメディアと自主学習のために、読解と語彙を維持します。",
            milestones: [
                "コスメや生活用品のかなが読める",
                "簡単な商品説明がわかる",
                "辞書を使ってライフスタイル系のブログが読める",
                "日本語字幕でライフスタイル動画が観られる",
                "雑誌やレビューが楽に読める",
                "日本語で自分のコンテンツを発信できる",
                "どんなメディアも楽しみ、意見を流暢に伝えられる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "生活の語彙"],
                    &["ラベルのかなが読める", "身近な言葉がわかる"],
                    "商品ラベルは楽しい最初の読む練習になります。",
                    TB_KANA,
                    "日本のスキンケア商品に書かれている言葉を10個教えてください。",
                ),
                M::new(
                    &["形容詞", "毎日の習慣"],
                    &["ものを描写できる", "日課を話せる"],
                    "形容詞があれば、好きなものを何でも表現できます。",
                    TB_BASIC,
                    "私の朝のルーティンを簡単な日本語で説明するのを手伝ってください。",
                ),
                M::new(
                    &["商品説明", "おすすめの伝え方"],
                    &["商品ページが読める", "おすすめができる"],
                    "説明とおすすめは同じ文型で表現できます。",
                    TB_ELEMENTARY,
                    "短い商品レビューを書くので、直してください。",
                ),
                M::new(
                    &["ブログとSNS", "くだけた書き言葉"],
                    &["ブログが読める", "短い投稿が書ける"],
                    "ブログや投稿は短く、続けやすく、やる気が出ます。",
                    TB_PRE_INTERMEDIATE,
                    "お気に入りのカフェについてのインスタのキャプションを一緒に書いてください。",
                ),
                M::new(
                    &["雑誌", "レビュー"],
                    &["雑誌が読める", "意見を比べられる"],
                    "雑誌はトレンドと豊かな語彙が詰まっています。",
                    TB_INTERMEDIATE,
                    "ウェルネスのトレンドについての記事を要約して、クイズしてください。",
                ),
                M::new(
                    &["コンテンツ作り", "意見の表現"],
                    &["長めの投稿が書ける", "意見を発信できる"],
                    "発信することで、知っている言葉が使える言葉に変わります。",
                    TB_UPPER,
                    "私の短いブログ記事を自然な日本語に直してください。",
                ),
                M::new(
                    &["繊細な表現", "エッセイ"],
                    &["エッセイが書ける", "微妙な気持ちを表現できる"],
                    "繊細な表現が、あなたらしい文章を作ります。",
                    TB_ADVANCED,
                    "満足した気持ちを表す、よりニュアンスのある言い方を教えてください。",
                ),
            ],
        },
        // challenge
        PurposeText {
            label: "チャレンジ",
            description: "自分への挑戦やJLPT合格を目指したい",
            reason_beginner: "JLPTで問われる文法と語彙を、偏りなく固めます。",
            reason_advanced: "JLPTの各セクションに合わせて、すべての技能を均等に配分します。",
            milestones: [
                "ひらがな・カタカナを完全に覚える",
                "N5レベルの模試に合格する",
                "N4レベルの模試に合格する",
                "N3の模試で合格ラインに届く",
                "余裕をもってN3に合格する",
                "N2の模試で合格ラインに届く",
                "自信をもってN1に挑戦する",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "学習習慣"],
                    &["かなの読み書きができる", "毎日勉強できる"],
                    "毎日の習慣がどんな挑戦の土台にもなります。",
                    TB_KANA,
                    "毎日の目標付きで、30日間のかな学習プランを作ってください。",
                ),
                M::new(
                    &["N5の文法", "N5の語彙"],
                    &["N5の問題に答えられる", "漢字を100字読める"],
                    "N5の内容が最初の成功への近道です。",
                    TB_BASIC,
                    "N5形式の文法問題を解説付きで5問出してください。",
                ),
                M::new(
                    &["N4の文法", "漢字練習"],
                    &["N4の問題に答えられる", "漢字を300字読める"],
                    "N4で初級文法が完成します。",
                    TB_ELEMENTARY,
                    "N4形式の読解問題を出して、私の答えを確認してください。",
                ),
                M::new(
                    &["N3の文法", "読むスピード"],
                    &["短い文章が読める", "試験時間を管理できる"],
                    "N3から文章が長くなり、スピードが重要になります。",
                    TB_PRE_INTERMEDIATE,
                    "N3形式の読解の時間を計って、間違いを振り返ってください。",
                ),
                M::new(
                    &["N3の復習", "聴解練習"],
                    &["N3の模試に合格できる", "試験の音声についていける"],
                    "N3の受験者が最も点を落とすのは聴解です。",
                    TB_INTERMEDIATE,
                    "N3形式の聴解スクリプトと問題を作ってください。",
                ),
                M::new(
                    &["N2の文法", "新聞を読む"],
                    &["ニュース記事が読める", "N2の模試に合格できる"],
                    "N2の読解は実際の新聞に近いレベルです。",
                    TB_UPPER,
                    "混同しやすいN2の文法を5つ説明してください。",
                ),
                M::new(
                    &["N1の文法", "抽象的な文章"],
                    &["社説が読める", "N1の模試に合格できる"],
                    "N1では抽象的で改まった日本語が問われます。",
                    TB_ADVANCED,
                    "N1レベルの社説の一部を出して、筆者の主張について質問してください。",
                ),
            ],
        },
        // other
        PurposeText {
            label: "その他",
            description: "どんな目標にも対応できるバランス型プラン",
            reason_beginner: "文法と語彙で土台を作りながら、バランスよくスタートします。",
            reason_advanced: "土台ができたら会話を増やし、読解と聴解も並行して伸ばします。",
            milestones: [
                "ひらがな・カタカナが読める",
                "あいさつと簡単な質問ができる",
                "自分の日常生活について話せる",
                "日常会話ができる",
                "テレビがわかり、簡単な記事が読める",
                "仕事や学校で日本語を快適に使える",
                "ほとんどの場面で自由にコミュニケーションできる",
            ],
            monthly: [
                M::new(
                    &["ひらがな・カタカナ", "あいさつ"],
                    &["かなが読める", "あいさつができる"],
                    "かなとあいさつは、どの道にも共通する土台です。",
                    TB_KANA,
                    "ひらがなと基本のあいさつをクイズしてください。",
                ),
                M::new(
                    &["基本文法", "身近な語彙"],
                    &["簡単な文が作れる", "簡単な質問ができる"],
                    "基本文法で、単語を組み合わせて意味を作れるようになります。",
                    TB_BASIC,
                    "日本語に訳す簡単な文を10個出してください。",
                ),
                M::new(
                    &["動詞の活用", "日常生活の話題"],
                    &["一日の出来事を話せる", "予定を説明できる"],
                    "動詞の活用で、過去・現在・未来が話せるようになります。",
                    TB_ELEMENTARY,
                    "私の一日について質問して、動詞の形を直してください。",
                ),
                M::new(
                    &["中級文法", "会話のストラテジー"],
                    &["会話を続けられる", "理由を説明できる"],
                    "中級文法で、短い答えが本当の会話に変わります。",
                    TB_PRE_INTERMEDIATE,
                    "旅行の予定について、5分間私と会話してください。",
                ),
                M::new(
                    &["記事を読む", "自然な速さの聴解"],
                    &["簡単な記事が読める", "テレビについていける"],
                    "生の教材が、教科書と実際の日本語の橋渡しになります。",
                    TB_INTERMEDIATE,
                    "やさしい日本語の短いニュース記事を出して、クイズしてください。",
                ),
                M::new(
                    &["かたい言葉とくだけた言葉", "作文"],
                    &["場面で話し方を変えられる", "長い文章が書ける"],
                    "場面に合った言葉を選べることが中上級のしるしです。",
                    TB_UPPER,
                    "私のくだけた文章を、改まった日本語に書き換えてください。",
                ),
                M::new(
                    &["ニュアンス", "上級の読解"],
                    &["ニュアンスを表現できる", "何でも読める"],
                    "上級の学習は、ニュアンスと幅の広さがテーマです。",
                    TB_ADVANCED,
                    "似ている3つの日本語表現のニュアンスの違いを説明してください。",
                ),
            ],
        },
    ],
};
