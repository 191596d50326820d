//! Seed data for the restaurant table.
//!
//! Jerusalem restaurants with coordinates, grouped loosely by cuisine.
//! Seeding is idempotent: rows whose name already exists are skipped, so
//! restarting the server never duplicates or overwrites edited rows.

/// `(name, cuisine type, lat, lon)` rows inserted on first start.
pub const SEED_RESTAURANTS: &[(&str, &str, f64, f64)] = &[
    ("נאיה", "אסייתי", 31.772836, 35.192510),
    ("לוצ'נה", "איטלקי", 31.780904, 35.220143),
    ("הדקל 3", "בשרים", 31.783210, 35.218450),
    ("רוזה", "איטלקי", 31.782590, 35.219890),
    ("ממא איטליאנו", "איטלקי", 31.781240, 35.217900),
    ("אנגליקה ביסטרו", "בשרים", 31.776900, 35.222300),
    ("פיאנו פקטורי", "איטלקי", 31.771300, 35.219000),
    ("ליבי", "בשרים", 31.774530, 35.219330),
    ("בירנבאום", "בשרים", 31.778322, 35.221998),
    ("אגאדיר הכשר", "המבורגר", 31.777420, 35.219870),
    ("בלאק ירושלים", "המבורגר", 31.775650, 35.213980),
    ("מרקש", "מזרחי", 31.781132, 35.213441),
    ("המטבח של חלי", "מזרחי", 31.790951, 35.205885),
    ("שגב קודש", "בשרים", 31.779921, 35.216771),
    ("המוציא", "מזרחי", 31.784812, 35.220781),
    ("מגדל דוד גריל", "בשרים", 31.776880, 35.231210),
    ("בני הדייג", "בשרים", 31.794335, 35.168771),
    ("אבולעפיה הכשר", "מזרחי", 31.781777, 35.224777),
    ("גריל ברמות", "בשרים", 31.828120, 35.208910),
    ("מינאטו הכשר", "אסייתי", 31.780541, 35.219102),
    ("שיסו", "אסייתי", 31.780010, 35.214882),
    ("טטאמי", "אסייתי", 31.770412, 35.215991),
    ("סושי רחביה", "אסייתי", 31.774431, 35.212731),
    ("ריבר הכשר ירושלים", "אסייתי", 31.794450, 35.172311),
    ("מנדרין סושי", "אסייתי", 31.782111, 35.216442),
    ("בשרי מהדרין מחנה יהודה", "בשרים", 31.784631, 35.212124),
    ("הטאבון של סמי", "מזרחי", 31.783502, 35.211545),
    ("אלום גריל", "בשרים", 31.792452, 35.205991),
    ("סולומונס", "המבורגר", 31.785212, 35.211932),
    ("בורגר סטיישן", "המבורגר", 31.789213, 35.203002),
    ("בגריל שלנו", "בשרים", 31.778911, 35.223312),
    ("גחלים גולן", "בשרים", 31.807441, 35.214110),
    ("דוניא", "מזרחי", 31.787214, 35.212134),
    ("גריל 443", "בשרים", 31.857443, 35.239110),
    ("המושבה גריל בר", "בשרים", 31.761242, 35.201994),
    ("אליהו פרגיות", "בשרים", 31.799221, 35.199003),
    ("פרגיות המושבה", "בשרים", 31.796221, 35.202114),
    ("אנטריקוטי", "בשרים", 31.777114, 35.219903),
    ("סניף גריל רמות", "בשרים", 31.825552, 35.208231),
    ("מזרח ומערב גריל", "מזרחי", 31.774914, 35.212900),
    ("גולדיס", "המבורגר", 31.794412, 35.205411),
    ("האמריקה", "המבורגר", 31.781144, 35.214917),
    ("ברוני ביסטרו גריל", "בשרים", 31.759114, 35.208311),
    ("שיפודיה טעמי המזרח", "מזרחי", 31.787110, 35.213441),
    ("לחיים גריל", "בשרים", 31.783811, 35.221701),
    ("המנגליסט", "בשרים", 31.780311, 35.221402),
    ("דרום אמריקה גריל", "בשרים", 31.799510, 35.202321),
    ("לבנדר גריל", "בשרים", 31.767814, 35.207511),
    ("איליה גריל", "בשרים", 31.782411, 35.217114),
    ("גריל גורמה ירושלים", "בשרים", 31.778211, 35.217514),
    ("מגדל המנגל", "בשרים", 31.794881, 35.173994),
    ("הגריל של איציק", "בשרים", 31.782551, 35.220014),
    ("טעמי הכרם", "מזרחי", 31.788114, 35.187911),
    ("שיפודי רוממה", "בשרים", 31.806944, 35.192221),
    ("מסעדת לב הענבים", "מזרחי", 31.782441, 35.224019),
    ("שירת הבשר", "בשרים", 31.773884, 35.214913),
    ("שיפודי המושבה", "בשרים", 31.762554, 35.203149),
    ("גריל אבו רמזי", "בשרים", 31.794114, 35.219331),
    ("סולטן גריל", "מזרחי", 31.799144, 35.207773),
    ("מנגלי ישראל", "בשרים", 31.784610, 35.217441),
    ("סמיר גריל", "בשרים", 31.785104, 35.211908),
    ("המברגר פריים", "המבורגר", 31.781778, 35.219821),
    ("בורגר מירון", "המבורגר", 31.788212, 35.212114),
    ("בורגר קינג הכשר", "המבורגר", 31.776114, 35.218144),
    ("מודרן גריל", "בשרים", 31.774412, 35.231019),
    ("אמבטיה גריל בר", "בשרים", 31.770014, 35.214992),
    ("השיפוד המהיר", "בשרים", 31.785441, 35.212510),
    ("הטחנה", "מזרחי", 31.757812, 35.204412),
    ("פרגיות הכנסת", "בשרים", 31.777911, 35.205992),
    ("גריל גולן", "בשרים", 31.804112, 35.213114),
    ("הבשר הלבן (כשר)", "בשרים", 31.779712, 35.217810),
    ("המבורגריית טוסטי", "המבורגר", 31.782011, 35.220611),
    ("בשרים השלום", "בשרים", 31.781221, 35.205991),
    ("מזרחי טעים", "מזרחי", 31.785902, 35.214223),
    ("האריה השואג גריל", "בשרים", 31.796541, 35.205410),
    ("שאפו גריל", "בשרים", 31.790314, 35.217112),
    ("גריל 2000", "בשרים", 31.774014, 35.213114),
    ("אל גאוצ'ו ירושלים (כשר)", "בשרים", 31.790221, 35.216671),
    ("בורגרז", "המבורגר", 31.782214, 35.221994),
    ("הביסטרו של אבו שאקר", "מזרחי", 31.789914, 35.203211),
    ("טבע הבשר", "בשרים", 31.783012, 35.216512),
    ("מסעדת גולן", "בשרים", 31.804911, 35.213991),
    ("אש וארומה", "בשרים", 31.778412, 35.211514),
    ("בשר הרים", "בשרים", 31.787712, 35.206314),
    ("המסעדה הירושלמית", "מזרחי", 31.777512, 35.219114),
    ("שיפודי רמות פלוס", "בשרים", 31.827811, 35.209002),
    ("הגריל הדתי", "בשרים", 31.782910, 35.207890),
    ("שיפודי קסטל", "בשרים", 31.775522, 35.184211),
    ("בשרים העמק", "בשרים", 31.783512, 35.214781),
    ("הכפרי גריל", "בשרים", 31.771512, 35.215221),
    ("הביסטרו של עודד", "בשרים", 31.785314, 35.211114),
    ("שיפוד אנדור", "בשרים", 31.759882, 35.205014),
    ("אגדת הבשר", "בשרים", 31.782212, 35.219711),
    ("הפלא של הבשר", "בשרים", 31.785114, 35.211311),
    ("גריל הבירה", "בשרים", 31.774114, 35.218321),
    ("בורגר האוס מהדרין", "המבורגר", 31.782211, 35.218114),
    ("קצבים ושות׳", "בשרים", 31.783114, 35.217214),
    ("הטעמים של רומי", "מזרחי", 31.787219, 35.214509),
    ("אצל חנניה", "מזרחי", 31.781214, 35.220114),
    ("אלפרדו בשרים", "בשרים", 31.778411, 35.213501),
    ("גריל המלכים", "בשרים", 31.784912, 35.218711),
    ("טעמי הרובע", "מזרחי", 31.774211, 35.235114),
    ("מנגל השכונה", "בשרים", 31.792214, 35.205112),
    ("בית הבשר", "בשרים", 31.788514, 35.212411),
    ("שיפודי בוכרים", "בשרים", 31.793411, 35.219114),
    ("סניף 71 גריל", "בשרים", 31.795011, 35.207881),
    ("מאכלי המזרח", "מזרחי", 31.785119, 35.214991),
    ("גריל ישראל", "בשרים", 31.781514, 35.220814),
    ("מסעדת מימון", "מזרחי", 31.786714, 35.213114),
    ("אש וליבו", "בשרים", 31.781114, 35.215514),
    ("גריל השוק", "בשרים", 31.784014, 35.212114),
    ("הגריל המהיר", "בשרים", 31.783912, 35.219114),
    ("המנגל של תומר", "בשרים", 31.781214, 35.207714),
    ("שיפודי המכרז", "בשרים", 31.782511, 35.213714),
    ("בשרים גולן מערב", "בשרים", 31.804712, 35.210912),
    ("המקור הבשרי", "בשרים", 31.780114, 35.217114),
    ("גריל האלה", "בשרים", 31.783412, 35.212711),
    ("אש התבור", "בשרים", 31.789214, 35.217314),
    ("מזרחית טובה", "מזרחי", 31.786114, 35.209914),
    ("בשרים וים", "בשרים", 31.778914, 35.215214),
    ("הדר הבשרים", "בשרים", 31.777214, 35.212514),
    ("הטעם השביעי", "מזרחי", 31.781714, 35.219814),
    ("תמשיח בשרים", "בשרים", 31.785214, 35.210614),
    ("שיפודי הלל", "בשרים", 31.780414, 35.220214),
    ("בשרים פרימיום", "בשרים", 31.782514, 35.214214),
    ("אש הגבעה", "בשרים", 31.792014, 35.214714),
    ("מזרחי הממלכה", "מזרחי", 31.785714, 35.214114),
    ("שיפודי קינג", "בשרים", 31.784114, 35.207714),
    ("המסעדה העממית", "מזרחי", 31.782114, 35.222214),
    ("שיפוד העיר", "בשרים", 31.774914, 35.212114),
    ("טעם ירושלים", "מזרחי", 31.786514, 35.208914),
    ("גריל האומה", "בשרים", 31.793114, 35.212514),
    ("גחלים 28", "בשרים", 31.783714, 35.220114),
    ("בשרים בכיכר", "בשרים", 31.776314, 35.214214),
    ("הטאבון והגריל", "בשרים", 31.777214, 35.216514),
    ("מנגל ישראלי", "בשרים", 31.781514, 35.218414),
    ("הבשרים של איתי", "בשרים", 31.788414, 35.215114),
    ("חגיגת בשרים", "בשרים", 31.783814, 35.211114),
    ("גריל של פעם", "בשרים", 31.784214, 35.218114),
    ("מזרחית באווירה", "מזרחי", 31.784114, 35.212914),
    ("אש הסולטן", "בשרים", 31.781914, 35.214414),
    ("מסעדת עזרא", "מזרחי", 31.786114, 35.209214),
    ("הגריל המשפחתי", "בשרים", 31.781314, 35.213314),
    ("בשרים הטובים", "בשרים", 31.780914, 35.215614),
    ("אמפריית המנגל", "בשרים", 31.787214, 35.212214),
    ("מזרחי הנביאים", "מזרחי", 31.782314, 35.219714),
    ("גריל הגבעה", "בשרים", 31.792914, 35.209714),
    ("שיפודי משה", "בשרים", 31.777014, 35.217314),
    ("מנגל ישראלי בית הכרם", "בשרים", 31.793014, 35.187414),
    ("בשרים הנשיא", "בשרים", 31.776814, 35.214114),
    ("גריל מאה שערים", "בשרים", 31.788912, 35.219114),
    ("הטאבון של אבו שאקר", "מזרחי", 31.786211, 35.215411),
    ("ממלכת הבשרים", "בשרים", 31.782912, 35.217112),
    ("המסעדה הירושלמית", "מזרחי", 31.780714, 35.212214),
    ("שיפודי רחביה", "בשרים", 31.772914, 35.214012),
    ("מזרחי אותנטי", "מזרחי", 31.776214, 35.218714),
    ("גריל שומרי", "בשרים", 31.779614, 35.210114),
    ("המנגל החם", "בשרים", 31.783214, 35.223114),
    ("מזרחית הכותל", "מזרחי", 31.775114, 35.234214),
    ("שיפודי ארזים", "בשרים", 31.789714, 35.216314),
    ("גריל המלכות", "בשרים", 31.784514, 35.211114),
    ("הטאבון והמנגל", "בשרים", 31.782914, 35.209814),
    ("מזרחי אותנטי טעמי ירושלים", "מזרחי", 31.777914, 35.213714),
    ("בשרים גולן דרום", "בשרים", 31.802114, 35.213214),
    ("אש הגלבוע", "בשרים", 31.781114, 35.222214),
    ("שיפודי התחנה", "בשרים", 31.764814, 35.212514),
    ("המזרחית של שלומי", "מזרחי", 31.784114, 35.205814),
    ("גריל טעמי הכפר", "בשרים", 31.793214, 35.199414),
    ("ברביקיו ירושלים", "בשרים", 31.788914, 35.214914),
    ("שיפודי מרכז העיר", "בשרים", 31.781314, 35.221114),
    ("מנגולד בשרים", "בשרים", 31.787714, 35.209114),
    ("שיפודי השדרה", "בשרים", 31.772114, 35.217914),
    ("הבשרים של אדיר", "בשרים", 31.789214, 35.205314),
    ("מזרחית אבן ישראל", "מזרחי", 31.779014, 35.212214),
    ("גריל השלושה", "בשרים", 31.783114, 35.219114),
    ("מסעדת ברכת שלום", "מזרחי", 31.775514, 35.211214),
    ("שיפודי הקסטל", "בשרים", 31.804114, 35.177114),
    ("גריל אורנים", "בשרים", 31.792214, 35.209614),
    ("המעשנה הירושלמית", "בשרים", 31.781914, 35.214514),
    ("בשרים על האש", "בשרים", 31.786814, 35.216914),
    ("הגריל הציוני", "בשרים", 31.782714, 35.218114),
    ("אמנות הבשר", "בשרים", 31.777414, 35.214414),
    ("האש של רחמים", "בשרים", 31.784814, 35.221814),
    ("בשרים הדור הבא", "בשרים", 31.783214, 35.211714),
    ("מזרחית הבירה", "מזרחי", 31.781414, 35.216214),
    ("הגריל השוקק", "בשרים", 31.788014, 35.214114),
    ("שיפודי עמק רפאים", "בשרים", 31.769514, 35.215914),
    ("בשרים גבעת מרדכי", "בשרים", 31.776514, 35.203114),
    ("הבשר של ניסים", "בשרים", 31.785214, 35.212214),
    ("שיפודי דוד המלך", "בשרים", 31.775014, 35.229214),
    ("בשרים הסנהדרין", "בשרים", 31.792814, 35.210314),
    ("הגריל של הצפון", "בשרים", 31.801314, 35.210914),
    ("האש המזרחית", "מזרחי", 31.782114, 35.213214),
    ("מנגל גן הפעמון", "בשרים", 31.769214, 35.217714),
    ("המסעדה הבוכרית", "מזרחי", 31.793014, 35.221114),
    ("שיפודי קרן היסוד", "בשרים", 31.772314, 35.219714),
    ("מזרחית רמות", "מזרחי", 31.825514, 35.197214),
    ("הבשרים של רועי", "בשרים", 31.782514, 35.205814),
    ("מנגל ירושלים", "בשרים", 31.781014, 35.215014),
    ("גריל חברון", "בשרים", 31.770714, 35.229114),
    ("בלייז פיצה", "איטלקי", 31.774912, 35.219411),
    ("פיצה פיציקטו", "איטלקי", 31.783144, 35.213774),
    ("פיצה טוקיו", "איטלקי", 31.770441, 35.215901),
    ("פיצה רומא", "איטלקי", 31.779212, 35.222014),
    ("פיצה מייקל", "איטלקי", 31.790114, 35.205881),
    ("טוסקנה פיצה", "איטלקי", 31.774211, 35.211914),
    ("פיצה פילגרם", "איטלקי", 31.777512, 35.214812),
    ("פיצה ברכת שמים", "איטלקי", 31.792411, 35.207114),
    ("פיצה קסטל", "איטלקי", 31.762114, 35.203411),
    ("פיצה רפאל", "איטלקי", 31.776114, 35.216214),
    ("קפה לוצ'נה", "איטלקי", 31.780450, 35.220210),
    ("קפה גרג ממילא", "איטלקי", 31.776882, 35.224911),
    ("קפית הסינמטק", "איטלקי", 31.768914, 35.219412),
    ("קפה ברנז'ה", "איטלקי", 31.781914, 35.213512),
    ("לחם ארז", "איטלקי", 31.785114, 35.216114),
    ("קפה לנדוור מלחה", "איטלקי", 31.751412, 35.204314),
    ("קפה לנדוור רמות", "איטלקי", 31.825212, 35.208992),
    ("פיצה בריגה", "איטלקי", 31.781501, 35.213901),
    ("פיצה אגד שמאי", "איטלקי", 31.780412, 35.221112),
    ("פיצה רומא מהדרין", "איטלקי", 31.783781, 35.213439),
    ("פיצה ביג מאמא", "איטלקי", 31.788211, 35.207114),
    ("פיצה גולדה", "איטלקי", 31.783014, 35.219114),
];
