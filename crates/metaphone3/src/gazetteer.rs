// Name lists consulted by the S, W and J rules.
//
// Each entry is matched against the start of the word, so "SWART" covers
// "SWARTLEY" too.

/// Swedish, Dutch and Slavic SW- names that also get the native SV.
pub(crate) const SW_ALT_SV: &[&str] = &[
    "SWANSON", "SWENSON", "SWINSON", "SWENSEN", "SWOBODA",
    "SWIDERSKI", "SWARTHOUT",
    "SWEARENGIN",
];

/// German SW- names that also get XV, matching the SCHW- spelling.
pub(crate) const SW_ALT_XV: &[&str] = &[
    "SWART",
    "SWARTZ", "SWARTS", "SWIGER",
    "SWITZER", "SWANGER", "SWIGERT", "SWIGART", "SWIHART",
    "SWEITZER", "SWATZELL", "SWINDLER",
    "SWINEHART",
    "SWEARINGEN",
];

/// Germanic and Slavic W- names that get an alternate V.
pub(crate) const GERMANIC_SLAVIC_W: &[&str] = &[
    "WEE", "WIX", "WAX",
    "WOLF", "WEIS", "WAHL", "WALZ", "WEIL", "WERT", "WINE", "WILK", "WALT", "WOLL", "WADA",
    "WULF", "WEHR", "WURM", "WYSE", "WENZ", "WIRT", "WOLK", "WEIN", "WYSS", "WASS", "WANN",
    "WINT", "WINK", "WILE", "WIKE", "WIER", "WELK", "WISE",
    "WIRTH", "WIESE", "WITTE", "WENTZ", "WOLFF", "WENDT", "WERTZ", "WILKE", "WALTZ", "WEISE",
    "WOOLF", "WERTH", "WEESE", "WURTH", "WINES", "WARGO", "WIMER", "WISER", "WAGER", "WILLE",
    "WILDS", "WAGAR", "WERTS", "WITTY", "WIENS", "WIEBE", "WIRTZ", "WYMER", "WULFF", "WIBLE",
    "WINER", "WIEST", "WALKO", "WALLA", "WEBRE", "WEYER", "WYBLE", "WOMAC", "WILTZ", "WURST",
    "WOLAK", "WELKE", "WEDEL", "WEIST", "WYGAN", "WUEST", "WEISZ", "WALCK", "WEITZ", "WYDRA",
    "WANDA", "WILMA", "WEBER",
    "WETZEL", "WEINER", "WENZEL", "WESTER", "WALLEN", "WENGER", "WALLIN", "WEILER", "WIMMER",
    "WEIMER", "WYRICK", "WEGNER", "WINNER", "WESSEL", "WILKIE", "WEIGEL", "WOJCIK", "WENDEL",
    "WITTER", "WIENER", "WEISER", "WEXLER", "WACKER", "WISNER", "WITMER", "WINKLE", "WELTER",
    "WIDMER", "WITTEN", "WINDLE", "WASHER", "WOLTER", "WILKEY", "WIDNER", "WARMAN", "WEYANT",
    "WEIBEL", "WANNER", "WILKEN", "WILTSE", "WARNKE", "WALSER", "WEIKEL", "WESNER", "WITZEL",
    "WROBEL", "WAGNON", "WINANS", "WENNER", "WOLKEN", "WILNER", "WYSONG", "WYCOFF", "WUNDER",
    "WINKEL", "WIDMAN", "WELSCH", "WEHNER", "WEIGLE", "WETTER", "WUNSCH", "WHITTY", "WAXMAN",
    "WILKER", "WILHAM", "WITTIG", "WITMAN", "WESTRA", "WEHRLE", "WASSER", "WILLER", "WEGMAN",
    "WARFEL", "WYNTER", "WERNER", "WAGNER", "WISSER",
    "WISEMAN", "WINKLER", "WILHELM", "WELLMAN", "WAMPLER", "WACHTER", "WALTHER", "WYCKOFF",
    "WEIDNER", "WOZNIAK", "WEILAND", "WILFONG", "WIEGAND", "WILCHER", "WIELAND", "WILDMAN",
    "WALDMAN", "WORTMAN", "WYSOCKI", "WEIDMAN", "WITTMAN", "WIDENER", "WOLFSON", "WENDELL",
    "WEITZEL", "WILLMAN", "WALDRUP", "WALTMAN", "WALCZAK", "WEIGAND", "WESSELS", "WIDEMAN",
    "WOLTERS", "WIREMAN", "WILHOIT", "WEGENER", "WOTRING", "WINGERT", "WIESNER", "WAYMIRE",
    "WHETZEL", "WENTZEL", "WINEGAR", "WESTMAN", "WYNKOOP", "WALLICK", "WURSTER", "WINBUSH",
    "WILBERT", "WALLACH", "WEISSER", "WEISNER", "WINDERS", "WILLMON", "WILLEMS", "WIERSMA",
    "WACHTEL", "WARNICK", "WEIDLER", "WALTRIP", "WHETSEL", "WHELESS", "WELCHER", "WALBORN",
    "WILLSEY", "WEINMAN", "WAGAMAN", "WOMMACK", "WINGLER", "WINKLES", "WIEDMAN", "WHITNER",
    "WOLFRAM", "WARLICK", "WEEDMAN", "WHISMAN", "WINLAND", "WEESNER", "WARTHEN", "WETZLER",
    "WENDLER", "WALLNER", "WOLBERT", "WITTMER", "WISHART", "WILLIAM",
    "WESTPHAL", "WICKLUND", "WEISSMAN", "WESTLUND", "WOLFGANG", "WILLHITE", "WEISBERG",
    "WALRAVEN", "WOLFGRAM", "WILHOITE", "WECHSLER", "WENDLING", "WESTBERG", "WENDLAND",
    "WININGER", "WHISNANT", "WESTRICK", "WESTLING", "WESTBURY", "WEITZMAN", "WEHMEYER",
    "WEINMANN", "WISNESKI", "WHELCHEL", "WEISHAAR", "WAGGENER", "WALDROUP", "WESTHOFF",
    "WIEDEMAN", "WASINGER", "WINBORNE",
    "WHISENANT", "WEINSTEIN", "WESTERMAN", "WASSERMAN", "WITKOWSKI", "WEINTRAUB", "WINKELMAN",
    "WINKFIELD", "WANAMAKER", "WIECZOREK", "WIECHMANN", "WOJTOWICZ", "WALKOWIAK", "WEINSTOCK",
    "WILLEFORD", "WARKENTIN", "WEISINGER", "WINKLEMAN", "WILHEMINA",
    "WISNIEWSKI", "WUNDERLICH", "WHISENHUNT", "WEINBERGER", "WROBLEWSKI", "WAGUESPACK",
    "WEISGERBER", "WESTERVELT", "WESTERLUND", "WASILEWSKI", "WILDERMUTH", "WESTENDORF",
    "WESOLOWSKI", "WEINGARTEN", "WINEBARGER", "WESTERBERG", "WANNAMAKER", "WEISSINGER",
    "WALDSCHMIDT", "WEINGARTNER", "WINEBRENNER",
    "WOLFENBARGER",
    "WOJCIECHOWSKI",
];

/// J- names that also match names starting with a Y sound
/// ("John" and "Ian", "Joseph" and "Yusef").
pub(crate) const J_ALT_Y: &[&str] = &[
    "JAN", "JON", "JIN", "JEN",
    "JUHL", "JULY", "JOEL", "JOHN", "JOSH", "JUDE", "JUNE", "JONI", "JULI", "JENA", "JUNG",
    "JINA", "JANA", "JENI", "JANN", "JONA", "JENE", "JULE", "JANI", "JONG", "JEAN", "JONE",
    "JARA", "JUST", "JOST", "JAHN", "JACO", "JANG",
    "JOANN", "JANEY", "JANAE", "JOANA", "JUTTA", "JULEE", "JANAY", "JANEE", "JETTA", "JOHNA",
    "JOANE", "JAYNA", "JANES", "JONAS", "JONIE", "JUSTA", "JUNIE", "JUNKO", "JENAE", "JULIO",
    "JINNY", "JOHNS", "JACOB", "JETER", "JAFFE", "JESKE", "JANKE", "JAGER", "JANIK", "JANDA",
    "JOSHI", "JULES", "JANTZ", "JEANS", "JUDAH", "JANUS", "JENNY", "JENEE", "JONAH", "JOSUE",
    "JOSEF", "JULIE", "JULIA", "JANIE", "JANIS", "JENNA", "JANNA", "JEANA", "JENNI", "JEANE",
    "JONNA",
    "JORDAN", "JORDON", "JOSEPH", "JOSHUA", "JOSIAH", "JOSPEH", "JUDSON", "JULIAN", "JULIUS",
    "JUNIOR", "JUDITH", "JOESPH", "JOHNIE", "JOANNE", "JEANNE", "JOANNA", "JOSEFA", "JULIET",
    "JANNIE", "JANELL", "JASMIN", "JANINE", "JOHNNY", "JEANIE", "JEANNA", "JOHNNA", "JOELLE",
    "JOVITA", "JONNIE", "JANEEN", "JANINA", "JOANIE", "JAZMIN", "JANENE", "JONELL", "JENELL",
    "JANETT", "JANETH", "JENINE", "JOELLA", "JOEANN", "JOHANA", "JENICE", "JANNET", "JANISE",
    "JULENE", "JANEAN", "JAIMEE", "JOETTE", "JANYCE", "JENEVA", "JACOBS", "JENSEN", "JANSEN",
    "JAEGER", "JACOBY", "JENSON", "JARMAN", "JOSLIN", "JESSEN", "JAHNKE", "JACOBO", "JULIEN",
    "JEPSON", "JANSON", "JACOBI", "JARBOE", "JOHSON", "JANZEN", "JETTON", "JUNKER", "JONSON",
    "JAROSZ", "JENNER", "JAGGER", "JEPSEN", "JORDEN", "JANNEY", "JUHASZ", "JERGEN",
    "JOHNSON", "JOHNNIE", "JASMINE", "JEANNIE", "JOHANNA", "JANELLE", "JANETTE", "JULIANA",
    "JUSTINA", "JOSETTE", "JOELLEN", "JENELLE", "JULIETA", "JULIANN", "JULISSA", "JENETTE",
    "JANETTA", "JOSELYN", "JONELLE", "JESENIA", "JANESSA", "JAZMINE", "JEANENE", "JOANNIE",
    "JADWIGA", "JOLANDA", "JULIANE", "JANUARY", "JEANICE", "JANELLA", "JEANETT", "JENNINE",
    "JOHANNE", "JOHNSIE", "JANIECE", "JENNELL", "JAMISON", "JANSSEN", "JOHNSEN", "JARDINE",
    "JAGGERS", "JURGENS", "JOURDAN", "JULIANO", "JOSEPHS", "JHONSON", "JOZWIAK", "JANICKI",
    "JELINEK", "JANSSON", "JOACHIM", "JACOBUS", "JENNING", "JANTZEN",
    "JOSEFINA", "JEANNINE", "JULIANNE", "JULIANNA", "JONATHAN", "JONATHON", "JEANETTE",
    "JANNETTE", "JEANETTA", "JOHNETTA", "JENNEFER", "JULIENNE", "JOSPHINE", "JEANELLE",
    "JOHNETTE", "JULIEANN", "JOSEFINE", "JULIETTA", "JOHNSTON", "JACOBSON", "JACOBSEN",
    "JOHANSEN", "JOHANSON", "JAWORSKI", "JENNETTE", "JELLISON", "JOHANNES", "JASINSKI",
    "JUERGENS", "JARNAGIN", "JEREMIAH", "JEPPESEN", "JARNIGAN", "JANOUSEK",
    "JOHNATHAN", "JOHNATHON", "JORGENSEN", "JEANMARIE", "JOSEPHINA", "JEANNETTE", "JOSEPHINE",
    "JEANNETTA", "JORGENSON", "JANKOWSKI", "JOHNSTONE", "JABLONSKI", "JOSEPHSON", "JOHANNSEN",
    "JURGENSEN", "JIMMERSON", "JOHANSSON",
    "JAKUBOWSKI",
];
